// Harf End-to-End Test Scenarios
//
// These tests simulate a user typing into the text field, clicking
// on-screen keys and editing the text directly.
//
// Run with: cargo test -p harf-core --test e2e_scenarios

mod e2e_tests {
    use harf_core::input::InputEvent;
    use harf_core::state::{OutputBuffer, Session};
    use harf_core::transform::{TransformResult, TransliterationEngine};

    // =========================================================================
    // Test Helpers
    // =========================================================================

    /// Type a string key by key through the pure engine API, inserting
    /// unhandled keys the way a text field would
    fn type_pure(engine: &TransliterationEngine, keys: &str) -> String {
        let mut buffer = OutputBuffer::new();
        for key in keys.chars() {
            let (next, result) = engine.handle_keystroke(buffer, key);
            buffer = next;
            if !result.is_handled() {
                buffer.push(key);
            }
        }
        buffer.into_string()
    }

    fn typed(keys: &str) -> String {
        let mut session = Session::default();
        session.type_text(keys);
        session.text().to_string()
    }

    // =========================================================================
    // Scenario: single-letter substitution
    // =========================================================================

    #[test]
    fn test_scenario_every_mapped_key_on_empty_buffer() {
        let engine = TransliterationEngine::default();
        for (latin, arabic) in engine.layout().active().iter() {
            let (buffer, result) = engine.handle_keystroke(OutputBuffer::new(), latin);
            assert_eq!(buffer.as_str(), arabic.to_string(), "key {:?}", latin);
            assert_eq!(result, TransformResult::Translated(arabic));
        }
    }

    #[test]
    fn test_scenario_every_mapped_key_after_space() {
        let engine = TransliterationEngine::default();
        for (latin, arabic) in engine.layout().active().iter() {
            let (buffer, _) = engine.handle_keystroke(OutputBuffer::from("ث "), latin);
            assert_eq!(buffer.as_str(), format!("ث {}", arabic));
        }
    }

    #[test]
    fn test_scenario_unmapped_keys_are_not_handled() {
        let engine = TransliterationEngine::default();
        for key in ['0', '9', 'A', 'B', '.', '/', '"', ' ', '\t', 'ß'] {
            let (buffer, result) = engine.handle_keystroke(OutputBuffer::from("كتب"), key);
            assert_eq!(buffer.as_str(), "كتب");
            assert!(!result.is_handled(), "key {:?}", key);
        }
    }

    // =========================================================================
    // Scenario: diacritic combination
    // =========================================================================

    #[test]
    fn test_scenario_ha_then_apostrophe_gives_ta_marbuta() {
        let mut session = Session::default();
        session.keystroke('h');
        assert_eq!(session.text(), "ه");
        let result = session.keystroke('\'');
        assert_eq!(session.text(), "ة");
        assert_eq!(result, TransformResult::Combined { base: 'ه', result: 'ة' });
    }

    #[test]
    fn test_scenario_alef_then_a_gives_madda() {
        let engine = TransliterationEngine::default();
        let (buffer, _) = engine.handle_keystroke(OutputBuffer::from("ا"), 'a');
        assert_eq!(buffer.as_str(), "آ");
    }

    #[test]
    fn test_scenario_every_rule_fires_from_typed_base() {
        let engine = TransliterationEngine::default();
        for (key, result) in engine.layout().diacritics().iter() {
            let buffer = OutputBuffer::from(format!("ب{}", key.base));
            let (buffer, outcome) = engine.handle_keystroke(buffer, key.trigger);
            assert_eq!(buffer.as_str(), format!("ب{}", result), "rule {}", key);
            assert!(matches!(outcome, TransformResult::Combined { .. }));
        }
    }

    #[test]
    fn test_scenario_words() {
        assert_eq!(typed("slam"), "سلام");
        assert_eq!(typed("mdrsh'"), "مدرسة");
        assert_eq!(typed("t'lj"), "ثلج");
        assert_eq!(typed("aaxr"), "آشر");
        assert_eq!(typed("-amr"), "أمر");
        assert_eq!(typed("H'lyj"), "خليج");
    }

    #[test]
    fn test_scenario_combination_does_not_cross_word_boundary() {
        // "ت" ends the first word; after the space the apostrophe is literal.
        assert_eq!(typed("t '"), "ت '");
        // The last word ends in "ب", which has no rule, so the earlier
        // "ت" is never consulted.
        assert_eq!(typed("t p'"), "ت ب'");
    }

    #[test]
    fn test_scenario_combination_is_one_step() {
        // ت' -> ث, then a second apostrophe has no rule keyed by ث.
        assert_eq!(typed("t''"), "ث'");
    }

    #[test]
    fn test_scenario_passthrough_character_blocks_combination() {
        // A digit inserted verbatim becomes the last letter.
        assert_eq!(typed("t1'"), "ت1'");
    }

    #[test]
    fn test_scenario_pure_api_matches_session() {
        let engine = TransliterationEngine::default();
        for keys in ["slam 3lykm", "mdrsh' kbyrh'", "H'bz w ma'", "aan"] {
            assert_eq!(type_pure(&engine, keys), typed(keys), "keys {:?}", keys);
        }
    }

    // =========================================================================
    // Scenario: clicks and direct edits
    // =========================================================================

    #[test]
    fn test_scenario_clicked_keys_never_combine() {
        let engine = TransliterationEngine::default();
        let pairs = [('ت', '\''), ('ا', 'a'), ('ه', '\''), ('ء', 'a')];
        for (c1, c2) in pairs {
            let buffer = engine.append_literal(OutputBuffer::new(), c1);
            let buffer = engine.append_literal(buffer, c2);
            assert_eq!(buffer.as_str(), format!("{}{}", c1, c2));
        }
    }

    #[test]
    fn test_scenario_click_then_type_can_combine() {
        // A clicked letter is committed text; a later physical keystroke
        // looks back at it like any other letter.
        let mut session = Session::default();
        session.apply(InputEvent::Click('ت'));
        session.apply(InputEvent::Keystroke('\''));
        assert_eq!(session.text(), "ث");
    }

    #[test]
    fn test_scenario_replace_round_trip() {
        let mut session = Session::default();
        session.type_text("ktb");
        for text in ["", "hello", "مرحبا بك", "ت\n", "  "] {
            session.apply(InputEvent::Replace(text.to_string()));
            assert_eq!(session.text(), text);
        }
    }

    #[test]
    fn test_scenario_paste_then_continue_typing() {
        let mut session = Session::default();
        session.replace("كتا");
        session.keystroke('b');
        assert_eq!(session.text(), "كتاب");
    }

    #[test]
    fn test_scenario_disabled_combination() {
        let mut session = Session::default();
        session.engine_mut().set_combine_diacritics(false);
        session.type_text("h'");
        assert_eq!(session.text(), "ه'");
    }
}
