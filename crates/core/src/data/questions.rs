use crate::model::quiz::{AnswerOption, PracticeType, Question, QuestionError};
use crate::model::QuestionId;

/// Built-in questions for `practice_type`, in presentation order.
///
/// Speak & Match has no multiple-choice questions; its bank is empty.
///
/// # Errors
///
/// Returns `QuestionError` if a compiled-in question is malformed.
pub fn question_bank(practice_type: PracticeType) -> Result<Vec<Question>, QuestionError> {
    match practice_type {
        PracticeType::ListenIdentify => listen_identify(),
        PracticeType::SpeakMatch => Ok(Vec::new()),
        PracticeType::Transcribe => transcribe(),
        PracticeType::MinimalPairs => minimal_pairs(),
    }
}

fn plain(values: &[&str]) -> Vec<AnswerOption> {
    values.iter().map(|value| AnswerOption::plain(*value)).collect()
}

fn listen_identify() -> Result<Vec<Question>, QuestionError> {
    Ok(vec![
        Question::new(
            QuestionId::new(1),
            "Which symbol matches the sound?",
            plain(&["/i/", "/ɪ/", "/e/", "/ɛ/"]),
            "/i/",
        )?
        .with_audio_ref("/i/")
        .with_explanation("This is the close front unrounded vowel /i/ as in \"see\""),
        Question::new(
            QuestionId::new(2),
            "Which symbol matches the sound?",
            plain(&["/θ/", "/ð/", "/s/", "/f/"]),
            "/θ/",
        )?
        .with_audio_ref("/θ/")
        .with_explanation("This is the voiceless dental fricative /θ/ as in \"think\""),
    ])
}

fn transcribe() -> Result<Vec<Question>, QuestionError> {
    Ok(vec![
        Question::new(
            QuestionId::new(1),
            "think",
            plain(&["/θɪŋk/", "/ðɪŋk/", "/θiːŋk/", "/tɪŋk/"]),
            "/θɪŋk/",
        )?
        .with_explanation("\"think\" starts with the voiceless dental fricative /θ/"),
        Question::new(
            QuestionId::new(2),
            "goat",
            plain(&["/ɡɒt/", "/ɡəʊt/", "/ɡuːt/", "/ɡɔːt/"]),
            "/ɡəʊt/",
        )?
        .with_explanation("The RP GOAT vowel is the diphthong /əʊ/"),
        Question::new(
            QuestionId::new(3),
            "cat",
            plain(&["/kʌt/", "/kɑːt/", "/kæt/", "/ket/"]),
            "/kæt/",
        )?
        .with_explanation("\"cat\" has the near-open front vowel /æ/"),
    ])
}

fn minimal_pairs() -> Result<Vec<Question>, QuestionError> {
    Ok(vec![
        Question::new(
            QuestionId::new(1),
            "Which word did you hear?",
            vec![
                AnswerOption::transcribed("ship", "/ʃɪp/"),
                AnswerOption::transcribed("sheep", "/ʃiːp/"),
            ],
            "ship",
        )?
        .with_audio_ref("/ʃɪp/")
        .with_explanation("\"ship\" has the short lax vowel /ɪ/; \"sheep\" has long /iː/"),
        Question::new(
            QuestionId::new(2),
            "Which word did you hear?",
            vec![
                AnswerOption::transcribed("bit", "/bɪt/"),
                AnswerOption::transcribed("beat", "/biːt/"),
            ],
            "beat",
        )?
        .with_audio_ref("/biːt/")
        .with_explanation("\"beat\" has the long tense vowel /iː/"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bank_is_well_formed() {
        for pt in PracticeType::ALL {
            let bank = question_bank(pt).unwrap();
            for q in &bank {
                assert!(q.options().iter().any(|o| o.value == q.correct()));
            }
        }
    }

    #[test]
    fn speak_match_has_no_questions() {
        assert!(question_bank(PracticeType::SpeakMatch).unwrap().is_empty());
        assert_eq!(question_bank(PracticeType::ListenIdentify).unwrap().len(), 2);
    }
}
