use super::draft::{Field, SubmissionDraft};

/// True when every field holds at least one character.
///
/// Values are not trimmed and the email address is not checked for
/// format, a draft of three single spaces is submittable.
pub fn is_submittable(draft: &SubmissionDraft) -> bool {
    Field::ALL.iter().all(|field| !draft.get(*field).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_empty_field_blocks_submission() {
        let cases = [
            ("", "ana@x.com", "Hi"),
            ("Ana", "", "Hi"),
            ("Ana", "ana@x.com", ""),
            ("", "", ""),
        ];
        for (name, email, message) in cases {
            let draft = SubmissionDraft::new(name, email, message);
            assert!(!is_submittable(&draft), "{:?}", draft);
        }
    }

    #[test]
    fn test_complete_draft_is_submittable() {
        let draft = SubmissionDraft::new("Ana", "ana@x.com", "Hi");
        assert!(is_submittable(&draft));
    }

    #[test]
    fn test_whitespace_and_malformed_email_accepted() {
        let draft = SubmissionDraft::new(" ", "not-an-email", "\n");
        assert!(is_submittable(&draft));
    }
}
