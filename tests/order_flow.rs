use insta::assert_snapshot;
use order_form::{
    catalog::DeviceCatalog,
    config::{Config, FormVariant},
    form::{FieldName, FormState},
    init,
    render::SummaryMode,
};

fn state_for(config: &Config) -> FormState {
    FormState::new(config.catalog(), config.validator(), config.renderer())
}

fn fill(state: &mut FormState) {
    state.apply_input(FieldName::Device, "10gb plan");
    state.select_suggestion(0);
    state.apply_input(FieldName::Name, "minh");
    state.apply_input(FieldName::Address, "1-2-3 Shinjuku, Tokyo");
    state.apply_input(FieldName::Gmail, "minh@gmail.com");
    state.apply_input(FieldName::PhoneNumber, "08012345678");
    state.apply_input(FieldName::MonthlyFee, "3000");
    state.apply_input(FieldName::FirstPayment, "¥5,000");
    state.apply_input(FieldName::ReceiveTime, "Saturday 10:00");
    state.apply_input(FieldName::Platform, "Facebook");
    state.apply_input(FieldName::InfoLink, "https://example.com/orders/42");
}

#[test]
fn check_summary_layout() {
    init();
    let mut state = state_for(&Config::default());
    fill(&mut state);

    let text = state.submit(SummaryMode::Check).unwrap();
    assert_snapshot!(text, @r"
    **Devices: Sim data 10GB 1 year plan
    -Name: Minh
    -Address: 1-2-3 Shinjuku, Tokyo
    -Gmail: minh@gmail.com
    -Phone number: 08012345678
    -Monthly fee: ¥3000
    -Total of first payment: ¥5000 + ¥1500 (delivery fee)
    -Time to receive: Saturday 10:00
    ");
}

#[test]
fn confirm_summary_layout() {
    let mut state = state_for(&Config::default());
    fill(&mut state);

    let text = state.submit(SummaryMode::Confirm).unwrap();
    assert_snapshot!(text, @r"
    **Thiết bị: Sim data 10GB 1 year plan
    -Tên: minh
    -Địa chỉ: 1-2-3 Shinjuku, Tokyo
    -Gmail: minh@gmail.com
    -Sđt: 08012345678
    -Smp: ¥3000
    -Ship daibiki freeship: ¥6500
    -Thời gian nhận: Saturday 10:00
    Facebook
    https://example.com/orders/42
    ");
}

#[test]
fn minimal_order_renders_both_modes() {
    let mut state = FormState::default();
    state.apply_input(FieldName::Device, "Sim data 10GB 1 year plan");
    state.apply_input(FieldName::Name, "minh");
    state.apply_input(FieldName::Gmail, "minh@gmail.com");
    state.apply_input(FieldName::MonthlyFee, "¥3000");
    state.apply_input(FieldName::FirstPayment, "¥5000");

    let check = state.submit(SummaryMode::Check).unwrap().to_string();
    assert!(check.lines().any(|line| line == "-Name: Minh"));
    assert!(check
        .lines()
        .any(|line| line == "-Total of first payment: ¥5000 + ¥1500 (delivery fee)"));

    let confirm = state.submit(SummaryMode::Confirm).unwrap();
    assert!(confirm.lines().any(|line| line == "-Ship daibiki freeship: ¥6500"));
}

#[test]
fn bilingual_variant_is_stricter() {
    let config = Config {
        variant: FormVariant::Bilingual,
        ..Config::default()
    };
    let mut state = state_for(&config);
    fill(&mut state);
    state.apply_input(FieldName::Gmail, "");
    state.apply_input(FieldName::PhoneNumber, "080-1234-5678");

    let errors = state.submit(SummaryMode::Confirm).unwrap_err();
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![FieldName::Gmail, FieldName::PhoneNumber]
    );

    state.apply_input(FieldName::Gmail, "minh@gmail.com");
    state.apply_input(FieldName::PhoneNumber, "08012345678");
    let text = state.submit(SummaryMode::Check).unwrap();
    assert!(text.contains("-Name: minh"));
}

#[test]
fn custom_fee_flows_into_both_templates() {
    let config = Config {
        delivery_fee: 990.0,
        ..Config::default()
    };
    let mut state = state_for(&config);
    fill(&mut state);

    let check = state.submit(SummaryMode::Check).unwrap().to_string();
    assert!(check.contains("¥5000 + ¥990 (delivery fee)"));
    let confirm = state.submit(SummaryMode::Confirm).unwrap();
    assert!(confirm.contains("-Ship daibiki freeship: ¥5990"));
}

#[test]
fn device_query_needs_every_token() {
    let catalog = DeviceCatalog::default();
    let matches = catalog.filter("sim 5gb");
    assert!(!matches.is_empty());
    for entry in &matches {
        let lowered = entry.to_lowercase();
        assert!(lowered.contains("sim") && lowered.contains("5gb"), "{entry}");
    }
    let expected: Vec<String> = catalog
        .entries()
        .iter()
        .filter(|entry| {
            let lowered = entry.to_lowercase();
            lowered.contains("sim") && lowered.contains("5gb")
        })
        .cloned()
        .collect();
    assert_eq!(matches, expected);
}
