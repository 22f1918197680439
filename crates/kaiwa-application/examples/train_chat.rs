//! Drives the send pipeline end to end with a scripted responder and prints
//! the resulting sidebar and transcript.
//!
//! Run with: `cargo run -p kaiwa-application --example train_chat`

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use kaiwa_application::SendPipeline;
use kaiwa_core::conversation::{ConversationStore, filter_conversations};
use kaiwa_core::responder::ReplyEnvelope;
use kaiwa_interaction::ScriptedResponder;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let store = Arc::new(RwLock::new(ConversationStore::with_starter_conversations(
        "demo-avatar",
    )));
    let responder = Arc::new(ScriptedResponder::new([
        ReplyEnvelope::flat("Happy to help! Tell me about the role first."),
        ReplyEnvelope::batch("Got it. I'll keep answers short from now on."),
    ]));
    let pipeline = SendPipeline::new(store.clone(), responder, "demo-avatar");

    let id = pipeline.create_conversation().await;
    pipeline.send("Help me rehearse a product pitch.").await?;

    // Rework the opening line in place, then resubmit.
    let draft = pipeline.begin_edit(0).await?;
    println!("editing: {draft}\n");
    pipeline
        .send("Help me rehearse a 30-second product pitch.")
        .await?;

    let now = Utc::now();
    let store = store.read().await;
    println!("-- sidebar --");
    for conversation in filter_conversations(store.list(), "") {
        println!(
            "[{}] {} - {}",
            conversation.freshness(now),
            conversation.title,
            conversation.preview
        );
    }

    println!("\n-- transcript --");
    let conversation = store.get(&id).expect("conversation exists");
    for message in &conversation.messages {
        println!("{:?}: {}", message.role, message.content);
    }

    Ok(())
}
