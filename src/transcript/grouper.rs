//! Groups word-level transcription output into per-speaker utterances.

use crate::transcript::types::{Utterance, WordUnit};

/// Merge a time-ordered word stream into maximal same-speaker runs.
///
/// Each speaker change closes the current utterance at the new word's start
/// minus `boundary_offset` seconds, so adjacent utterances never share an
/// exact boundary. The final utterance closes at the last word's end time.
///
/// Pure transformation over already-validated input: empty input yields
/// empty output, a single-speaker stream yields exactly one utterance.
pub fn group_by_speaker(words: &[WordUnit], boundary_offset: f64) -> Vec<Utterance> {
    let mut grouped = Vec::new();
    let mut current_speaker: Option<u32> = None;
    let mut current_words: Vec<&str> = Vec::new();
    let mut current_start = 0.0;

    for word in words {
        if Some(word.speaker_id) != current_speaker {
            if let Some(speaker_id) = current_speaker {
                grouped.push(Utterance {
                    speaker_id,
                    text: current_words.join(" "),
                    start_time: current_start,
                    end_time: word.start_time - boundary_offset,
                });
            }
            current_speaker = Some(word.speaker_id);
            current_words = vec![&word.text];
            current_start = word.start_time;
        } else {
            current_words.push(&word.text);
        }
    }

    // Close the final in-progress utterance at the stream's last word end
    if let (Some(speaker_id), Some(last)) = (current_speaker, words.last()) {
        grouped.push(Utterance {
            speaker_id,
            text: current_words.join(" "),
            start_time: current_start,
            end_time: last.end_time,
        });
    }

    grouped
}
