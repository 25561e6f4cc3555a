use super::*;

#[test]
fn test_init_logging_twice_keeps_first_subscriber() {
    init_logging(false);
    init_logging(true);
    tracing::info!("still logging after second init");
}
