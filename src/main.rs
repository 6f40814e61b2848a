//! Demo binary: drives a scripted edit session against the in-memory
//! adapters, so the whole lifecycle can be watched on the console.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use sales_desk::adapters::{
    ConsoleMessages, ConsoleView, FixtureChooseService, InMemorySalesRepository,
};
use sales_desk::application::DeliveryEditController;
use sales_desk::config::AppConfig;
use sales_desk::ports::{Selection, BO_CODE_CUSTOMER, BO_CODE_MATERIAL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let repository = Arc::new(InMemorySalesRepository::new());
    let chooser = Arc::new(
        FixtureChooseService::new()
            .with_candidates(
                BO_CODE_CUSTOMER,
                vec![
                    Selection::new("C0001", "Ipsum Ltd"),
                    Selection::new("C0002", "Dolor AG"),
                ],
            )
            .with_candidates(
                BO_CODE_MATERIAL,
                vec![
                    Selection::new("A0001", "Widget"),
                    Selection::new("A0002", "Gadget"),
                ],
            ),
    );
    let view = Arc::new(ConsoleView::new());
    let messages = Arc::new(ConsoleMessages::agreeable());

    let mut controller =
        DeliveryEditController::new(repository.clone(), chooser, view, messages);

    // Fresh document: pick a customer, add two lines, pick a material.
    controller.run(None).await;
    controller.choose_customer().await;
    controller.add_line();
    controller.add_line();
    if let Some(line) = controller
        .delivery()
        .and_then(|d| d.visible_lines().first().map(|l| l.line_id()))
    {
        controller.choose_material(line).await;
    }
    controller.save().await;

    // Drop the second line and save again.
    if let Some(line) = controller
        .delivery()
        .and_then(|d| d.visible_lines().last().map(|l| l.line_id()))
    {
        controller.remove_lines(&[line]);
    }
    controller.save().await;

    // Clone to a new document, then delete the clone after saving it.
    controller.create(true).await;
    controller.save().await;
    controller.delete().await;

    println!("{} document(s) left in the store", repository.len());
    Ok(())
}
