//! # handler-chain
//!
//! The host's per-message dispatch loop. Every handler's `before` runs first, then `handle` in
//! registration order until one claims the event (`Stop` or `Reply`), then every `after` in
//! reverse order. A claimed event is never offered to later handlers.

use bot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        debug!(
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            if !handler.before(message).await? {
                let handler_name = std::any::type_name_of_val(handler.as_ref());
                info!(
                    chat_id = message.chat.id,
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            if response.is_claimed() {
                info!(
                    chat_id = message.chat.id,
                    message_id = %message.id,
                    handler = %handler_name,
                    "step: event claimed, propagation stopped"
                );
                final_response = response;
                break;
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        debug!(
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bot_core::{Chat, User};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn create_test_message(content: &str) -> Message {
        Message::incoming(
            "test_message_id",
            User::new(123, Some("test_user")),
            Chat::group(456),
            content,
        )
    }

    struct CountingHandler {
        handle_count: Arc<AtomicUsize>,
        response: HandlerResponse,
    }

    impl CountingHandler {
        fn new(handle_count: Arc<AtomicUsize>, response: HandlerResponse) -> Self {
            Self {
                handle_count,
                response,
            }
        }
    }

    #[async_trait::async_trait]
    impl Handler for CountingHandler {
        async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
            self.handle_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn test_continue_reaches_every_handler() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let chain = HandlerChain::new()
            .add_handler(Arc::new(CountingHandler::new(first.clone(), HandlerResponse::Continue)))
            .add_handler(Arc::new(CountingHandler::new(second.clone(), HandlerResponse::Ignore)));

        let result = chain.handle(&create_test_message("test")).await.unwrap();

        assert_eq!(result, HandlerResponse::Continue);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stop_claims_event_and_skips_later_handlers() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let chain = HandlerChain::new()
            .add_handler(Arc::new(CountingHandler::new(first.clone(), HandlerResponse::Stop)))
            .add_handler(Arc::new(CountingHandler::new(second.clone(), HandlerResponse::Continue)));

        let result = chain.handle(&create_test_message("test")).await.unwrap();

        assert_eq!(result, HandlerResponse::Stop);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_before_false_stops_chain() {
        struct Blocking;

        #[async_trait::async_trait]
        impl Handler for Blocking {
            async fn before(&self, _message: &Message) -> Result<bool> {
                Ok(false)
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let chain = HandlerChain::new()
            .add_handler(Arc::new(Blocking))
            .add_handler(Arc::new(CountingHandler::new(count.clone(), HandlerResponse::Continue)));

        let result = chain.handle(&create_test_message("test")).await.unwrap();

        assert_eq!(result, HandlerResponse::Stop);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_after_runs_in_reverse_with_final_response() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        struct OrderHandler {
            name: &'static str,
            reply: Option<&'static str>,
            order: Arc<std::sync::Mutex<Vec<String>>>,
        }

        #[async_trait::async_trait]
        impl Handler for OrderHandler {
            async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
                self.order.lock().unwrap().push(format!("handle_{}", self.name));
                Ok(match self.reply {
                    Some(text) => HandlerResponse::Reply(text.to_string()),
                    None => HandlerResponse::Continue,
                })
            }

            async fn after(&self, _message: &Message, response: &HandlerResponse) -> Result<()> {
                assert_eq!(response, &HandlerResponse::Reply("done".to_string()));
                self.order.lock().unwrap().push(format!("after_{}", self.name));
                Ok(())
            }
        }

        let chain = HandlerChain::new()
            .add_handler(Arc::new(OrderHandler {
                name: "first",
                reply: None,
                order: order.clone(),
            }))
            .add_handler(Arc::new(OrderHandler {
                name: "second",
                reply: Some("done"),
                order: order.clone(),
            }));

        chain.handle(&create_test_message("test")).await.unwrap();

        let executed = order.lock().unwrap();
        assert_eq!(
            *executed,
            vec!["handle_first", "handle_second", "after_second", "after_first"]
        );
    }
}
