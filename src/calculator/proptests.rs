//! Property-based tests for the expression engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::calculator::{Expression, ExpressionEngine, Key, Operator, Token};

    fn digits() -> impl Strategy<Value = String> {
        "[0-9]{1,3}"
    }

    fn operator() -> impl Strategy<Value = Operator> {
        prop::sample::select(Operator::ALL.to_vec())
    }

    fn key() -> impl Strategy<Value = Key> {
        prop_oneof![
            4 => digits().prop_map(Key::Digits),
            3 => operator().prop_map(Key::Operator),
            1 => Just(Key::Equals),
            1 => Just(Key::Delete),
            1 => Just(Key::Clear),
        ]
    }

    fn engine_after(keys: &[Key]) -> ExpressionEngine {
        let mut engine = ExpressionEngine::new();
        for key in keys {
            key.apply(&mut engine);
        }
        engine
    }

    proptest! {
        #[test]
        fn digit_entry_concatenates(groups in prop::collection::vec(digits(), 1..6)) {
            let mut expected = String::from("0");
            for group in &groups {
                if expected == "0" {
                    expected = group.clone();
                } else {
                    expected.push_str(group);
                }
            }

            let keys: Vec<Key> = groups.into_iter().map(Key::Digits).collect();
            let engine = engine_after(&keys);
            let expected = vec![Token::Number(expected)];
            prop_assert_eq!(engine.tokens(), expected.as_slice());
        }

        #[test]
        fn operator_replacement(
            keys in prop::collection::vec(key(), 0..12),
            first in operator(),
            second in operator(),
        ) {
            let mut replaced = engine_after(&keys);
            replaced.append_operator(first);
            replaced.append_operator(second);

            let mut direct = engine_after(&keys);
            direct.append_operator(second);

            prop_assert_eq!(replaced.tokens(), direct.tokens());
        }

        #[test]
        fn full_cancel_restores_default(keys in prop::collection::vec(key(), 0..20)) {
            let mut engine = engine_after(&keys);
            engine.cancel(true);
            prop_assert!(engine.expression().is_default());
            prop_assert_eq!(engine.display(), "0");
        }

        #[test]
        fn edits_keep_expression_well_formed(keys in prop::collection::vec(key(), 0..30)) {
            let engine = engine_after(&keys);
            let tokens = engine.tokens();

            prop_assert!(!tokens.is_empty());
            prop_assert!(tokens[0].is_number());
            for pair in tokens.windows(2) {
                prop_assert!(!(pair[0].is_operator() && pair[1].is_operator()));
            }

            let equals = tokens.iter().filter(|t| **t == Token::Equals).count();
            prop_assert!(equals <= 1);
            if equals == 1 {
                prop_assert_eq!(&tokens[tokens.len() - 2], &Token::Equals);
                prop_assert!(matches!(tokens.last(), Some(Token::Result(_))));
            }
        }

        #[test]
        fn display_parses_back(keys in prop::collection::vec(key(), 0..30)) {
            let engine = engine_after(&keys);
            let parsed: Expression = engine.display().parse().unwrap();
            prop_assert_eq!(parsed.tokens(), engine.tokens());
        }

        #[test]
        fn equals_is_idempotent(keys in prop::collection::vec(key(), 0..20)) {
            let mut engine = engine_after(&keys);
            engine.append_result();
            let once = engine.tokens().to_vec();
            engine.append_result();
            prop_assert_eq!(engine.tokens(), once.as_slice());
        }
    }
}
