use crate::ai::{LessonModel, generate_lesson_pack};
use crate::error::GenerationError;
use crate::logger;
use crate::models::{GenerationEvent, GenerationRequest};
use crossbeam_channel::{Receiver, Sender};
use std::io;
use std::thread;
use std::time::Duration;
use tokio::sync::watch;

/// Handle to the generation thread.
pub struct GenerationWorker {
    handle: thread::JoinHandle<()>,
    shutdown_tx: watch::Sender<bool>,
}

impl GenerationWorker {
    /// Stop the worker and wait for its thread. A call still waiting on the model
    /// is dropped rather than awaited.
    pub fn shutdown(self) -> thread::Result<()> {
        let _ = self.shutdown_tx.send(true);
        self.handle.join()
    }
}

/// Run lesson generation off the UI thread.
///
/// `make_model` runs once on the worker thread. If it fails, every request is
/// answered with that failure instead of a lesson pack. The thread exits when the
/// request sender is dropped or [`GenerationWorker::shutdown`] is called.
pub fn spawn_generation_worker<M, F>(
    make_model: F,
    timeout: Duration,
    event_tx: Sender<GenerationEvent>,
    request_rx: Receiver<GenerationRequest>,
) -> io::Result<GenerationWorker>
where
    M: LessonModel + 'static,
    F: FnOnce() -> Result<M, GenerationError> + Send + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let handle = thread::Builder::new()
        .name("lesson-pack::generation_worker".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log_error(&format!("Worker could not start runtime: {}", e));
                    return;
                }
            };

            let model = make_model();
            if let Err(e) = &model {
                logger::log_error(&format!("Model client unavailable: {}", e));
            }

            while let Ok(request) = request_rx.recv() {
                let GenerationRequest::Generate { request_id, input } = request;
                logger::log(&format!("Worker received request {}", request_id));

                let result = match &model {
                    Ok(model) => runtime.block_on(async {
                        tokio::select! {
                            result = generate_lesson_pack(model, &input, timeout) => Some(result),
                            Ok(_) = shutdown_rx.wait_for(|stop| *stop) => None,
                        }
                    }),
                    Err(e) => Some(Err(e.clone())),
                };
                let Some(result) = result else {
                    logger::log(&format!("Request {} dropped at shutdown", request_id));
                    break;
                };

                let event = match result {
                    Ok(output) => GenerationEvent::Completed {
                        request_id,
                        input,
                        output,
                    },
                    Err(e) => {
                        logger::log_error(&format!("Request {} failed: {}", request_id, e));
                        GenerationEvent::Failed {
                            request_id,
                            user_message: e.user_message().to_string(),
                            detail: e.to_string(),
                        }
                    }
                };

                if event_tx.send(event).is_err() {
                    break;
                }
            }

            logger::log("Generation worker exiting");
        })?;

    Ok(GenerationWorker {
        handle,
        shutdown_tx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::generator::MockLessonModel;
    use crate::error::GENERATION_FAILED_MESSAGE;
    use crate::models::{GradeLevel, LessonInput};
    use crossbeam_channel::unbounded;
    use std::time::Instant;

    fn request(request_id: u64) -> GenerationRequest {
        GenerationRequest::Generate {
            request_id,
            input: LessonInput::new("Fractions", GradeLevel::new(4).unwrap(), "china"),
        }
    }

    #[test]
    fn test_worker_completes_request() {
        let (request_tx, request_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let worker = spawn_generation_worker(
            || {
                Ok(MockLessonModel::replying(
                    r#"{"simplified_explanation":"Halves and quarters","practical_activity":"Fold paper"}"#,
                ))
            },
            Duration::from_secs(5),
            event_tx,
            request_rx,
        )
        .unwrap();

        request_tx.send(request(7)).unwrap();
        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            GenerationEvent::Completed {
                request_id, output, ..
            } => {
                assert_eq!(request_id, 7);
                assert_eq!(output.explanation, "Halves and quarters");
                assert_eq!(output.module_used, "china");
            }
            other => panic!("unexpected event: {:?}", other),
        }

        drop(request_tx);
        worker.shutdown().unwrap();
    }

    #[test]
    fn test_worker_reports_client_init_failure() {
        let (request_tx, request_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let worker = spawn_generation_worker::<MockLessonModel, _>(
            || Err(GenerationError::ClientInit("missing OPENROUTER_API_KEY".to_string())),
            Duration::from_secs(5),
            event_tx,
            request_rx,
        )
        .unwrap();

        request_tx.send(request(1)).unwrap();
        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            GenerationEvent::Failed {
                request_id,
                user_message,
                detail,
            } => {
                assert_eq!(request_id, 1);
                assert_eq!(user_message, GENERATION_FAILED_MESSAGE);
                assert!(detail.contains("OPENROUTER_API_KEY"));
            }
            other => panic!("unexpected event: {:?}", other),
        }

        drop(request_tx);
        worker.shutdown().unwrap();
    }

    #[test]
    fn test_shutdown_does_not_wait_for_inflight_call() {
        let (request_tx, request_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let worker = spawn_generation_worker(
            || Ok(MockLessonModel::replying("{}").with_delay(Duration::from_secs(3))),
            Duration::from_secs(10),
            event_tx,
            request_rx,
        )
        .unwrap();

        request_tx.send(request(3)).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        drop(request_tx);

        let started = Instant::now();
        worker.shutdown().unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(event_rx.try_recv().is_err());
    }
}
