//! Daily check-in summaries.

use mindplus_types::coping::{CheckInAnswer, CheckInSummary};

const UNKNOWN_EMOTION: &str = "unknown";

/// Fill in defaults the emotion service may have left out.
pub fn sanitize_answers(answers: &[CheckInAnswer]) -> Vec<CheckInAnswer> {
    answers
        .iter()
        .map(|answer| CheckInAnswer {
            emotion: Some(answer_emotion(answer).to_string()),
            confidence: Some(answer_confidence(answer)),
            ..answer.clone()
        })
        .collect()
}

/// Dominant emotion of the day.
///
/// Confidence is summed per emotion; the highest total wins and ties go to
/// the emotion seen first. The reported confidence is the winner's mean.
pub fn summarize(answers: &[CheckInAnswer]) -> CheckInSummary {
    // (emotion, total, count) in first-seen order
    let mut tally: Vec<(&str, f64, usize)> = Vec::new();
    for answer in answers {
        let emotion = answer_emotion(answer);
        let confidence = answer_confidence(answer);
        match tally.iter_mut().find(|(e, _, _)| *e == emotion) {
            Some(entry) => {
                entry.1 += confidence;
                entry.2 += 1;
            }
            None => tally.push((emotion, confidence, 1)),
        }
    }

    let mut winner: Option<(&str, f64, usize)> = None;
    for entry in tally {
        if winner.map_or(true, |(_, best, _)| entry.1 > best) {
            winner = Some(entry);
        }
    }

    match winner {
        Some((emotion, total, count)) => CheckInSummary {
            emotion: emotion.to_string(),
            confidence: total / count as f64,
        },
        None => CheckInSummary {
            emotion: UNKNOWN_EMOTION.to_string(),
            confidence: 0.0,
        },
    }
}

fn answer_emotion(answer: &CheckInAnswer) -> &str {
    answer
        .emotion
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(UNKNOWN_EMOTION)
}

fn answer_confidence(answer: &CheckInAnswer) -> f64 {
    answer.confidence.filter(|c| c.is_finite()).unwrap_or(0.0)
}
