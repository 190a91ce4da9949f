use crate::ai::{system_prompt, user_prompt, OpenRouterClient};
use crate::logger;
use crate::models::{AiRequest, AiResponse};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Dedicated generation thread. Requests arrive over `ai_rx`, responses go
/// back over `ai_tx`; client construction failures are reported as `Error`
/// responses. The thread exits when the request channel disconnects.
pub fn spawn_ai_worker(
    ai_tx: Sender<AiResponse>,
    ai_rx: Receiver<AiRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("content-studio::ai_worker".to_string())
        .spawn(move || loop {
            match ai_rx.recv() {
                Ok(AiRequest::Generate {
                    mode,
                    input,
                    question_count,
                    config,
                }) => {
                    logger::log(&format!(
                        "Worker received {} request ({} chars)",
                        mode.label(),
                        input.len()
                    ));
                    if let Ok(config_json) = serde_json::to_string(&config) {
                        logger::log(&format!("Request config: {}", config_json));
                    }
                    let client = match OpenRouterClient::new() {
                        Ok(client) => client,
                        Err(e) => {
                            let _ = ai_tx.send(AiResponse::Error {
                                error: format!("Failed to create AI client: {}", e),
                            });
                            continue;
                        }
                    };

                    let rt = tokio::runtime::Runtime::new().unwrap();

                    let system = system_prompt(mode);
                    let prompt = user_prompt(mode, &input, question_count);
                    let result =
                        rt.block_on(async { client.generate(system, &prompt, Some(&config)).await });

                    match result {
                        Ok(text) => {
                            logger::log(&format!(
                                "Worker sending {} completion ({} chars)",
                                mode.label(),
                                text.len()
                            ));
                            let _ = ai_tx.send(AiResponse::Completed { mode, text });
                        }
                        Err(e) => {
                            logger::log(&format!("Worker error: {}", e));
                            let _ = ai_tx.send(AiResponse::Error {
                                error: format!("Generation failed: {}", e),
                            });
                        }
                    }
                }
                Err(_) => {
                    // Channel disconnected, exit worker
                    logger::log("Worker channel disconnected, exiting");
                    break;
                }
            }
        })
        .expect("Failed to spawn AI worker thread")
}
