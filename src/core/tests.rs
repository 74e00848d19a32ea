#[cfg(test)]
mod tests {
    use crate::core::profile::{Identity, ProfileRecord, ProfileStoreError};
    use crate::core::wizard::{
        fields, onboarding, FieldValue, MemoryDraftStore, SessionPhase, SubmitError,
        WizardSession, DRAFT_KEY,
    };

    fn identity() -> Identity {
        Identity {
            id: "user-123".to_string(),
            email: "founder@acme.test".to_string(),
        }
    }

    fn fresh(store: &MemoryDraftStore) -> WizardSession<MemoryDraftStore> {
        WizardSession::initialize(onboarding(), store.clone())
    }

    /// Fill the required fields of every step.
    fn complete_all_steps(session: &mut WizardSession<MemoryDraftStore>) {
        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Acme".into()));
        session.set_field(
            fields::BUSINESS_DESCRIPTION,
            FieldValue::Text("We sell widgets".into()),
        );
        session.set_field(fields::INDUSTRY, FieldValue::Select("technology".into()));
        session.set_field(
            fields::TARGET_AUDIENCE,
            FieldValue::Text("Small business owners".into()),
        );
        session.set_field(fields::TARGET_MARKET, FieldValue::Select("national".into()));
        session.set_field(fields::MONTHLY_BUDGET, FieldValue::Select("$500-2K".into()));
        session.set_field(
            fields::PRIMARY_GOAL,
            FieldValue::Select("lead-generation".into()),
        );
        session.set_field(
            fields::SUCCESS_TIMELINE,
            FieldValue::Select("90-days".into()),
        );
        session.set_field(
            fields::BRAND_VOICE,
            FieldValue::MultiSelect(vec!["friendly".into(), "expert".into()]),
        );
        session.set_field(
            fields::COMMUNICATION_STYLE,
            FieldValue::Select("educational".into()),
        );
        session.set_field(fields::JARGON_LEVEL, FieldValue::Select("minimal".into()));
    }

    // ========================================================================
    // Initialization and defaults
    // ========================================================================

    #[test]
    fn fresh_session_starts_at_step_zero_with_defaults() {
        let store = MemoryDraftStore::new();
        let session = fresh(&store);

        assert_eq!(session.current_step(), 0);
        assert_eq!(session.phase(), SessionPhase::Editing);
        assert_eq!(session.step_count(), 4);
        assert_eq!(session.answers().text(fields::BUSINESS_NAME), "");
        assert_eq!(session.answers().slider_or(fields::TONE_LEVEL, 0), 50);
        assert_eq!(
            session.answers().items(fields::CONTENT_PRIORITIES),
            &[
                "How-to guides",
                "Industry insights",
                "Behind-the-scenes",
                "Case studies",
                "Quick tips",
                "Thought leadership",
            ]
        );
    }

    #[test]
    fn fresh_session_has_every_field_seeded() {
        let store = MemoryDraftStore::new();
        let session = fresh(&store);

        for field in onboarding().fields {
            assert!(
                session.answers().get(field.name).is_some(),
                "field {} should be seeded",
                field.name
            );
        }
    }

    // ========================================================================
    // Persistence and resume
    // ========================================================================

    #[test]
    fn set_field_persists_and_resumes() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Acme".into()));
        session.set_field(
            fields::MARKETING_CHANNELS,
            FieldValue::MultiSelect(vec!["email".into(), "blog".into()]),
        );

        let resumed = fresh(&store);
        assert_eq!(resumed.answers(), session.answers());
        assert_eq!(resumed.current_step(), session.current_step());
    }

    #[test]
    fn resume_restores_step_cursor_after_advancing() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        assert_eq!(session.advance(), Ok(()));
        assert_eq!(session.advance(), Ok(()));
        assert_eq!(session.current_step(), 2);

        let resumed = fresh(&store);
        assert_eq!(resumed.current_step(), 2);
        assert_eq!(resumed.answers(), session.answers());
    }

    #[test]
    fn malformed_draft_starts_fresh() {
        let store = MemoryDraftStore::new();
        store.put_raw(DRAFT_KEY, "{not json");

        let session = fresh(&store);
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.answers().text(fields::BUSINESS_NAME), "");
    }

    #[test]
    fn draft_with_out_of_range_step_is_rejected() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Acme".into()));

        // Corrupt only the step cursor, keeping the answers valid.
        let saved = store.raw(DRAFT_KEY).unwrap();
        store.put_raw(
            DRAFT_KEY,
            &saved.replace("\"currentStepIndex\":0", "\"currentStepIndex\":9"),
        );

        let resumed = fresh(&store);
        assert_eq!(resumed.current_step(), 0);
        assert_eq!(resumed.answers().text(fields::BUSINESS_NAME), "");
    }

    #[test]
    fn draft_with_unknown_field_is_rejected() {
        let store = MemoryDraftStore::new();
        store.put_raw(
            DRAFT_KEY,
            r#"{"answers":{"favouriteColour":{"kind":"text","value":"teal"}},"currentStepIndex":1}"#,
        );

        let resumed = fresh(&store);
        assert_eq!(resumed.current_step(), 0);
    }

    #[test]
    fn draft_with_wrong_field_shape_is_rejected() {
        let store = MemoryDraftStore::new();
        store.put_raw(
            DRAFT_KEY,
            r#"{"answers":{"businessName":{"kind":"slider","value":3}},"currentStepIndex":0}"#,
        );

        let resumed = fresh(&store);
        assert_eq!(resumed.answers().text(fields::BUSINESS_NAME), "");
    }

    #[test]
    fn draft_snapshot_uses_camel_case_keys() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Acme".into()));

        let raw = store.raw(DRAFT_KEY).unwrap();
        assert!(raw.contains("\"answers\""));
        assert!(raw.contains("\"currentStepIndex\""));
        assert!(raw.contains("\"businessName\""));
    }

    // ========================================================================
    // Validation and navigation
    // ========================================================================

    #[test]
    fn advance_blocks_on_missing_fields() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        let err = session.advance().unwrap_err();
        assert_eq!(
            err.missing_fields,
            vec![
                fields::BUSINESS_NAME,
                fields::BUSINESS_DESCRIPTION,
                fields::INDUSTRY
            ]
        );
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn business_step_advances_then_audience_step_gates() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Acme".into()));
        session.set_field(
            fields::BUSINESS_DESCRIPTION,
            FieldValue::Text("We sell widgets".into()),
        );
        session.set_field(fields::INDUSTRY, FieldValue::Select("technology".into()));

        assert_eq!(session.advance(), Ok(()));
        assert_eq!(session.current_step(), 1);

        let err = session.advance().unwrap_err();
        assert_eq!(
            err.missing_fields,
            vec![fields::TARGET_AUDIENCE, fields::TARGET_MARKET]
        );
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn whitespace_text_does_not_count_as_answered() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("   ".into()));
        session.set_field(
            fields::BUSINESS_DESCRIPTION,
            FieldValue::Text("We sell widgets".into()),
        );
        session.set_field(fields::INDUSTRY, FieldValue::Select("technology".into()));

        let err = session.advance().unwrap_err();
        assert_eq!(err.missing_fields, vec![fields::BUSINESS_NAME]);
    }

    #[test]
    fn empty_multi_select_blocks_final_step() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);
        session.set_field(fields::BRAND_VOICE, FieldValue::MultiSelect(Vec::new()));

        let err = session.validate_step(3).unwrap_err();
        assert_eq!(err.missing_fields, vec![fields::BRAND_VOICE]);
    }

    #[test]
    fn validate_step_out_of_range_is_ok() {
        let store = MemoryDraftStore::new();
        let session = fresh(&store);

        assert_eq!(session.validate_step(99), Ok(()));
    }

    #[test]
    fn retreat_saturates_at_first_step() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        session.retreat();
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn retreat_never_validates() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        assert_eq!(session.advance(), Ok(()));
        // Blank out a required field of the step behind us, then go back.
        session.set_field(fields::BUSINESS_NAME, FieldValue::Text(String::new()));
        session.retreat();
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn advance_clamps_at_last_step() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        for _ in 0..10 {
            assert_eq!(session.advance(), Ok(()));
        }
        assert_eq!(session.current_step(), 3);
    }

    // ========================================================================
    // Ordered lists
    // ========================================================================

    #[test]
    fn reorder_moves_element_preserving_relative_order() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        session.set_field(
            fields::CONTENT_PRIORITIES,
            FieldValue::OrderedList(vec!["A".into(), "B".into(), "C".into(), "D".into()]),
        );

        session.reorder(fields::CONTENT_PRIORITIES, 0, 2);
        assert_eq!(
            session.answers().items(fields::CONTENT_PRIORITIES),
            &["B", "C", "A", "D"]
        );
    }

    #[test]
    fn reorder_is_a_permutation() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        let before = {
            let mut items = session
                .answers()
                .items(fields::CONTENT_PRIORITIES)
                .to_vec();
            items.sort();
            items
        };

        session.reorder(fields::CONTENT_PRIORITIES, 5, 0);
        session.reorder(fields::CONTENT_PRIORITIES, 2, 4);
        session.reorder(fields::CONTENT_PRIORITIES, 1, 1);

        let after = {
            let mut items = session
                .answers()
                .items(fields::CONTENT_PRIORITIES)
                .to_vec();
            items.sort();
            items
        };
        assert_eq!(before, after);
    }

    #[test]
    fn reorder_out_of_bounds_is_a_noop() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        let before = session.answers().items(fields::CONTENT_PRIORITIES).to_vec();

        session.reorder(fields::CONTENT_PRIORITIES, 0, 99);
        session.reorder(fields::CONTENT_PRIORITIES, 99, 0);

        assert_eq!(
            session.answers().items(fields::CONTENT_PRIORITIES),
            before.as_slice()
        );
    }

    #[test]
    fn reorder_on_non_list_field_is_a_noop() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Acme".into()));

        session.reorder(fields::BUSINESS_NAME, 0, 1);
        assert_eq!(session.answers().text(fields::BUSINESS_NAME), "Acme");
    }

    #[test]
    fn reorder_persists_the_new_order() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        session.reorder(fields::CONTENT_PRIORITIES, 0, 3);
        let resumed = fresh(&store);
        assert_eq!(
            resumed.answers().items(fields::CONTENT_PRIORITIES),
            session.answers().items(fields::CONTENT_PRIORITIES)
        );
    }

    #[test]
    fn toggle_selection_adds_then_removes() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        session.toggle_selection(fields::MARKETING_CHANNELS, "email");
        session.toggle_selection(fields::MARKETING_CHANNELS, "blog");
        assert_eq!(
            session.answers().items(fields::MARKETING_CHANNELS),
            &["email", "blog"]
        );

        session.toggle_selection(fields::MARKETING_CHANNELS, "email");
        assert_eq!(session.answers().items(fields::MARKETING_CHANNELS), &["blog"]);
    }

    // ========================================================================
    // Submission
    // ========================================================================

    #[test]
    fn submit_requires_final_step_complete() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        let err = session.begin_submit(Some(&identity())).unwrap_err();
        assert!(matches!(err, SubmitError::Incomplete(_)));
        assert_eq!(session.phase(), SessionPhase::Editing);
    }

    #[test]
    fn submit_requires_identity() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        let err = session.begin_submit(None).unwrap_err();
        assert_eq!(err, SubmitError::NotAuthenticated);
        assert_eq!(session.phase(), SessionPhase::Editing);
    }

    #[test]
    fn successful_submit_clears_draft_exactly_once() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        let record = session.begin_submit(Some(&identity())).unwrap();
        assert_eq!(record.business_name, "Acme");
        assert_eq!(session.phase(), SessionPhase::Submitting);
        assert!(store.raw(DRAFT_KEY).is_some());

        assert_eq!(session.resolve_submit(Ok(())), Ok(()));
        assert_eq!(session.phase(), SessionPhase::Submitted);
        assert!(store.raw(DRAFT_KEY).is_none());

        // A second resolve must not clear again: plant a sentinel and check
        // it survives.
        store.put_raw(DRAFT_KEY, "sentinel");
        assert_eq!(session.resolve_submit(Ok(())), Ok(()));
        assert_eq!(store.raw(DRAFT_KEY).as_deref(), Some("sentinel"));
    }

    #[test]
    fn second_submit_after_completion_is_rejected() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        session.begin_submit(Some(&identity())).unwrap();
        session.resolve_submit(Ok(())).unwrap();

        let err = session.begin_submit(Some(&identity())).unwrap_err();
        assert_eq!(err, SubmitError::AlreadySubmitted);
    }

    #[test]
    fn submit_while_in_flight_is_rejected() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        session.begin_submit(Some(&identity())).unwrap();
        let err = session.begin_submit(Some(&identity())).unwrap_err();
        assert_eq!(err, SubmitError::InFlight);
    }

    #[test]
    fn failed_submit_preserves_draft_and_allows_retry() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        session.begin_submit(Some(&identity())).unwrap();
        let outcome = session.resolve_submit(Err(ProfileStoreError::Unreachable(
            "connection refused".into(),
        )));
        assert!(matches!(outcome, Err(SubmitError::Store(_))));
        assert_eq!(session.phase(), SessionPhase::Editing);
        assert!(store.raw(DRAFT_KEY).is_some());

        // User-initiated retry starts a new submission window.
        assert!(session.begin_submit(Some(&identity())).is_ok());
    }

    #[test]
    fn resolve_without_begin_is_rejected() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);

        let err = session.resolve_submit(Ok(())).unwrap_err();
        assert_eq!(err, SubmitError::NotInFlight);
    }

    #[test]
    fn mutations_are_ignored_while_submitting() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        session.begin_submit(Some(&identity())).unwrap();
        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Evil Corp".into()));
        session.reorder(fields::CONTENT_PRIORITIES, 0, 3);
        session.retreat();

        assert_eq!(session.answers().text(fields::BUSINESS_NAME), "Acme");
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn mutations_are_ignored_after_submitted() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        session.begin_submit(Some(&identity())).unwrap();
        session.resolve_submit(Ok(())).unwrap();

        session.set_field(fields::BUSINESS_NAME, FieldValue::Text("Evil Corp".into()));
        assert_eq!(session.answers().text(fields::BUSINESS_NAME), "Acme");
        assert_eq!(session.advance(), Ok(()));
        assert_eq!(session.current_step(), 0);
    }

    // ========================================================================
    // Profile record
    // ========================================================================

    #[test]
    fn profile_record_maps_answers_and_identity() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);
        session.set_field(fields::TONE_LEVEL, FieldValue::Slider(70));
        session.set_field(
            fields::CUSTOMER_PAIN_POINTS,
            FieldValue::Text("Manual processes".into()),
        );

        let record = session.begin_submit(Some(&identity())).unwrap();

        assert_eq!(record.id, "user-123");
        assert_eq!(record.email, "founder@acme.test");
        assert_eq!(record.business_name, "Acme");
        assert_eq!(record.business_description, "We sell widgets");
        assert_eq!(record.industry, "technology");
        assert_eq!(record.target_audience, "Small business owners");
        assert_eq!(record.brand_voice.voices, vec!["friendly", "expert"]);
        assert_eq!(record.brand_voice.communication_style, "educational");
        assert_eq!(record.brand_voice.tone_level, 70);
        assert_eq!(record.brand_voice.jargon_level, "minimal");
        assert_eq!(record.brand_voice.customer_pain_points, "Manual processes");
        assert_eq!(record.brand_voice.monthly_budget, "$500-2K");
        assert_eq!(record.brand_voice.content_priorities.len(), 6);
    }

    #[test]
    fn profile_record_serializes_with_expected_keys() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        let record = session.begin_submit(Some(&identity())).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("business_name").is_some());
        assert!(json.get("business_description").is_some());
        let brand_voice = json.get("brand_voice").unwrap();
        assert!(brand_voice.get("communicationStyle").is_some());
        assert!(brand_voice.get("toneLevel").is_some());
        assert!(brand_voice.get("contentPriorities").is_some());
        assert!(brand_voice.get("marketingChannels").is_some());
    }

    #[test]
    fn current_feedback_is_collected_but_not_submitted() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);
        session.set_field(
            fields::CURRENT_FEEDBACK,
            FieldValue::Text("Love the product".into()),
        );

        let record = session.begin_submit(Some(&identity())).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("Love the product"));

        // The answer itself survives in the draft for a failed submission.
        let _ = session.resolve_submit(Err(ProfileStoreError::Rejected {
            status: 503,
            message: "unavailable".into(),
        }));
        let resumed = fresh(&store);
        assert_eq!(
            resumed.answers().text(fields::CURRENT_FEEDBACK),
            "Love the product"
        );
    }

    #[test]
    fn profile_record_is_identical_to_a_direct_build() {
        let store = MemoryDraftStore::new();
        let mut session = fresh(&store);
        complete_all_steps(&mut session);

        let direct = ProfileRecord::from_answers(&identity(), session.answers());
        let via_submit = session.begin_submit(Some(&identity())).unwrap();
        assert_eq!(direct, via_submit);
    }
}
