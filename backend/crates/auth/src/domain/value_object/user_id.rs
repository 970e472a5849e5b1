use kernel::id::{IdSequence, markers};

pub use kernel::id::UserId;

/// Prefix of allocated user ids (`user_1`, `user_2`, ...)
pub const USER_ID_PREFIX: &str = "user";

pub type UserIdSequence = IdSequence<markers::User>;

/// Fresh sequence for a new credential store
pub fn user_id_sequence() -> UserIdSequence {
    IdSequence::new(USER_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ids() {
        let mut seq = user_id_sequence();
        assert_eq!(seq.next_id(), UserId::from_string("user_1"));
        assert_eq!(seq.next_id().as_str(), "user_2");
    }
}
