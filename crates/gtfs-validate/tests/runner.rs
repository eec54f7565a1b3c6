mod common;

use gtfs_model::{FeedInfo, Notice, NoticeCode, NoticeKey};
use gtfs_validate::rules::FeedStartDateBeforeEndDate;
use gtfs_validate::{
    FixedClock, InMemoryGtfsData, InMemoryValidationResults, RuleRunner, RunnerOptions,
    ValidationContext, ValidationRule,
};

use common::{CountingRepository, capture_logs, date, rule_announcements};

fn sample_data() -> InMemoryGtfsData {
    let mut data = InMemoryGtfsData::new();
    // Expires in 3 days: E038 and W009.
    data.insert_feed_info(
        FeedInfo::new("Metro", "https://metro.example", "en").with_end_date(date(2024, 5, 13)),
    );
    // Expires in 20 days: W009 only.
    data.insert_feed_info(
        FeedInfo::new("Ferries", "https://ferry.example", "en").with_end_date(date(2024, 5, 30)),
    );
    // Start after end: E037, E038 and W009.
    data.insert_feed_info(
        FeedInfo::new("Trams", "https://tram.example", "fr")
            .with_start_date(date(2024, 6, 1))
            .with_end_date(date(2024, 5, 1)),
    );
    // No dates at all.
    data.insert_feed_info(FeedInfo::new("Buses", "https://bus.example", "en"));
    data
}

fn clock() -> FixedClock {
    FixedClock(date(2024, 5, 10))
}

fn sorted(notices: Vec<Notice>) -> Vec<String> {
    let mut rendered: Vec<String> = notices
        .into_iter()
        .map(|notice| {
            format!(
                "{} {}",
                notice.code(),
                notice[NoticeKey::CompositeKeyFirstValue]
            )
        })
        .collect();
    rendered.sort();
    rendered
}

#[test]
fn test_default_runner_executes_catalog_in_order() {
    let repository = CountingRepository::new(sample_data());
    let results = InMemoryValidationResults::new();
    let clock = clock();

    let (executed, events) = capture_logs(|| {
        let ctx = ValidationContext::new(&repository, &results, &clock);
        RuleRunner::with_default_rules().run(&ctx)
    });

    assert_eq!(executed, 3);
    assert_eq!(repository.fetches(), 3, "one fetch per rule");
    let announced: Vec<Option<&str>> = rule_announcements(&events)
        .iter()
        .map(|event| event.rule.as_deref())
        .collect();
    assert_eq!(announced, [Some("E037"), Some("E038"), Some("W009")]);

    let report = results.into_report();
    assert_eq!(
        sorted(report.notices.clone()),
        [
            "E037 Trams",
            "E038 Metro",
            "E038 Trams",
            "W009 Ferries",
            "W009 Metro",
            "W009 Trams",
        ]
    );
    assert_eq!(report.error_count(), 3);
    assert_eq!(report.warning_count(), 3);
}

#[test]
fn test_excluded_rules_are_not_executed() {
    let data = sample_data();
    let results = InMemoryValidationResults::new();
    let clock = clock();
    let runner = RuleRunner::with_default_rules()
        .with_options(RunnerOptions::new().exclude(NoticeCode::W009));

    let (executed, events) = capture_logs(|| {
        let ctx = ValidationContext::new(&data, &results, &clock);
        runner.run(&ctx)
    });

    assert_eq!(executed, 2);
    assert_eq!(runner.active_codes(), [NoticeCode::E037, NoticeCode::E038]);
    assert_eq!(rule_announcements(&events).len(), 2);
    assert!(
        results
            .notices()
            .iter()
            .all(|notice| notice.code() != NoticeCode::W009)
    );
}

#[test]
fn test_parallel_run_produces_same_notices() {
    let data = sample_data();
    let clock = clock();

    let sequential = InMemoryValidationResults::new();
    RuleRunner::with_default_rules().run(&ValidationContext::new(&data, &sequential, &clock));

    let parallel = InMemoryValidationResults::new();
    let runner =
        RuleRunner::with_default_rules().with_options(RunnerOptions::new().with_parallel(true));
    let executed = runner.run(&ValidationContext::new(&data, &parallel, &clock));

    assert_eq!(executed, 3);
    assert_eq!(sorted(parallel.notices()), sorted(sequential.notices()));
}

#[test]
fn test_start_date_after_end_date() {
    let mut data = InMemoryGtfsData::new();
    data.insert_feed_info(
        FeedInfo::new("Trams", "https://tram.example", "fr")
            .with_start_date(date(2024, 6, 1))
            .with_end_date(date(2024, 5, 1)),
    );
    data.insert_feed_info(
        FeedInfo::new("Same day", "u", "en")
            .with_start_date(date(2024, 6, 1))
            .with_end_date(date(2024, 6, 1)),
    );
    data.insert_feed_info(FeedInfo::new("Start only", "u", "en").with_start_date(date(2030, 1, 1)));
    let results = InMemoryValidationResults::new();
    let clock = clock();

    FeedStartDateBeforeEndDate.execute(&ValidationContext::new(&data, &results, &clock));

    let notices = results.notices();
    assert_eq!(notices.len(), 1);
    let notice = &notices[0];
    assert_eq!(notice.code(), NoticeCode::E037);
    assert_eq!(notice[NoticeKey::FeedStartDate].to_string(), "2024-06-01");
    assert_eq!(notice[NoticeKey::FeedEndDate].to_string(), "2024-05-01");
    assert_eq!(notice[NoticeKey::FieldName].to_string(), "feed_start_date");
    assert_eq!(notice[NoticeKey::CompositeKeyThirdValue].to_string(), "fr");
}

#[test]
fn test_custom_rule_joins_runner() {
    struct AlwaysFlags;

    impl ValidationRule for AlwaysFlags {
        fn code(&self) -> NoticeCode {
            NoticeCode::W009
        }

        fn description(&self) -> &'static str {
            "Always flags"
        }

        fn validate(&self, ctx: &ValidationContext<'_>) {
            let today = ctx.clock.today();
            for (name, info) in ctx.repository.feed_info_all() {
                ctx.results.add_notice(Notice::feed_expiry(
                    self.code(),
                    today,
                    today,
                    info.composite_key(name),
                ));
            }
        }
    }

    let data = sample_data();
    let results = InMemoryValidationResults::new();
    let clock = clock();
    let mut runner = RuleRunner::new(Vec::new());
    runner.add_rule(Box::new(AlwaysFlags));

    let (_, events) = capture_logs(|| runner.run(&ValidationContext::new(&data, &results, &clock)));

    assert_eq!(
        rule_announcements(&events)[0].message,
        "Validating rule 'W009 - Always flags'"
    );
    assert_eq!(results.len(), 4);
}
