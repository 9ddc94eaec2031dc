/*!
 * Integration tests for table updates through the controller
 */

use anyhow::Result;

use glossed::app_controller::Controller;
use glossed::providers::MockOracle;
use glossed::TranslationTable;

use crate::common;

#[tokio::test]
async fn test_update_newWords_shouldExtendBothTables() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_table_pair(temp_dir.path(), &[("hello", "szia")])?;
    let controller = Controller::with_config(common::config_for(temp_dir.path()))?;
    let oracle = MockOracle::with_entries([("world", "Világ"), ("cat", "házi macska")]);

    let report = controller
        .update("en", "hu", "Hello\nWorld\ncat\n\nworld\n", &oracle)
        .await?;

    assert_eq!(report.added.len(), 2);
    assert_eq!(oracle.request_count(), 2);

    let forward = TranslationTable::load(temp_dir.path().join("en_to_hu.txt"))?;
    let reverse = TranslationTable::load(temp_dir.path().join("hu_to_en.txt"))?;
    assert_eq!(forward.get("world"), Some("világ"));
    assert_eq!(forward.get("cat"), Some("házimacska"));
    assert_eq!(reverse.get("világ"), Some("world"));

    // the updated pair must be usable for translation right away
    let outcome = controller.translate("en", "hu", "HelloWorld")?;
    assert_eq!(outcome.text, "SziaVilág");
    Ok(())
}

#[tokio::test]
async fn test_update_failingOracle_shouldRecordEmptyTranslationOnce() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_for(temp_dir.path()))?;
    let oracle = MockOracle::failing();

    let report = controller.update("en", "hu", "alpha\nbeta\n", &oracle).await?;

    // the first empty answer is accepted, the second one collides with it
    assert_eq!(report.added.len(), 1);
    assert_eq!(report.added[0].source, "alpha");
    assert_eq!(report.added[0].target, "");
    assert_eq!(report.skipped, vec!["beta".to_string()]);
    Ok(())
}

#[test]
fn test_update_knownWordsOnly_shouldNotQueryOracle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_table_pair(temp_dir.path(), &[("hello", "szia")])?;
    let controller = Controller::with_config(common::config_for(temp_dir.path()))?;
    let oracle = MockOracle::empty();

    let report = tokio_test::block_on(controller.update("en", "hu", "HELLO\nhello\n", &oracle))?;

    assert!(report.added.is_empty());
    assert_eq!(oracle.request_count(), 0);
    Ok(())
}
