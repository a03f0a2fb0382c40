use anyhow::Result;
use impactify::{
    AcronymEntry, ExportChoice, ExportOutcome, Exporter, ImpactAnswers, LocalStorage,
    StatementFormatter, SystemClipboard,
};
use tempfile::TempDir;

fn sample_answers() -> ImpactAnswers {
    ImpactAnswers {
        project: Some("Dual cluster".to_string()),
        action: "Deployed dual-region EKS".to_string(),
        business_impact: "Boosted availability".to_string(),
        specific_impact: "50% fewer alerts".to_string(),
        goal_alignment_and_financials: Some("OKR 2.1, saved $500".to_string()),
    }
}

fn statement(answers: &ImpactAnswers) -> Result<String> {
    let formatter = StatementFormatter::new(&[AcronymEntry {
        acronym: "EKS".to_string(),
        description: "Elastic Kubernetes Service".to_string(),
    }])?;
    Ok(formatter.try_generate(answers)?)
}

#[tokio::test]
async fn test_markdown_file_in_output_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("exports");
    let storage = LocalStorage::new(output_dir.to_str().unwrap().to_string());
    let exporter = Exporter::new(storage, SystemClipboard::with_commands(vec![]));

    let answers = sample_answers();
    let sentence = statement(&answers)?;
    let outcome = exporter.export(ExportChoice::Markdown, &answers, &sentence).await?;

    let path = output_dir.join("dual-cluster.md");
    assert_eq!(outcome, ExportOutcome::Saved(path.display().to_string()));
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "# Impact Statement\n\nDeployed dual-region EKS, which boosted availability, resulting in 50% fewer alerts. This aligned with OKR 2.1, saved $500.\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_json_file_contains_answers_and_statement() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let exporter = Exporter::new(storage, SystemClipboard::with_commands(vec![]));

    let answers = sample_answers();
    let sentence = statement(&answers)?;
    exporter.export(ExportChoice::Json, &answers, &sentence).await?;

    let written = std::fs::read_to_string(temp_dir.path().join("dual-cluster.json"))?;
    let value: serde_json::Value = serde_json::from_str(&written)?;

    assert_eq!(value["project"], "Dual cluster");
    assert_eq!(value["action"], "Deployed dual-region EKS");
    assert_eq!(value["businessImpact"], "Boosted availability");
    assert_eq!(value["specificImpact"], "50% fewer alerts");
    assert_eq!(value["goalAlignmentAndFinancials"], "OKR 2.1, saved $500");
    assert_eq!(value["impactStatement"], sentence.as_str());
    assert!(written.starts_with("{\n  \"project\""));

    let round_trip: ImpactAnswers = serde_json::from_value(value)?;
    assert_eq!(round_trip, answers);
    Ok(())
}

#[tokio::test]
async fn test_clipboard_without_tools_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let exporter = Exporter::new(storage, SystemClipboard::with_commands(vec![]));

    let answers = sample_answers();
    let result = exporter
        .export(ExportChoice::Clipboard, &answers, "Shipped.")
        .await;

    assert!(matches!(
        result,
        Err(impactify::ImpactError::ClipboardError { .. })
    ));
    Ok(())
}
