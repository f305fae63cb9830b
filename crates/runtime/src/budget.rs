//! Token budget allocation by task complexity

use crate::confidence::Complexity;

/// Tokens allocated to a task assessment by complexity bucket
pub fn token_budget(complexity: Complexity) -> u32 {
    match complexity {
        Complexity::Simple => 200,
        Complexity::Medium => 1000,
        Complexity::Complex => 2500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_total_over_all_complexities() {
        assert_eq!(token_budget(Complexity::Simple), 200);
        assert_eq!(token_budget(Complexity::Medium), 1000);
        assert_eq!(token_budget(Complexity::Complex), 2500);
    }

    #[test]
    fn budget_grows_with_complexity() {
        assert!(token_budget(Complexity::Simple) < token_budget(Complexity::Medium));
        assert!(token_budget(Complexity::Medium) < token_budget(Complexity::Complex));
    }
}
