use crate::handlers::UserHandler;
use user_service::Logger;

const SERVER_LOG_PREFIX: &str = "rpc";

pub struct RpcServer {
    user_handler: UserHandler,
    logger: Logger,
}

impl RpcServer {
    pub fn new(db_url: impl Into<String>) -> Self {
        Self::from_parts(UserHandler::new(db_url), Logger::new(SERVER_LOG_PREFIX))
    }

    pub fn from_parts(user_handler: UserHandler, logger: Logger) -> Self {
        Self {
            user_handler,
            logger,
        }
    }

    pub fn start(&self) {
        self.logger.log("RPC Server started");
        tracing::info!(users = self.user_handler.store().len(), "rpc server started");
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn user_handler(&self) -> &UserHandler {
        &self.user_handler
    }

    pub fn user_handler_mut(&mut self) -> &mut UserHandler {
        &mut self.user_handler
    }
}
