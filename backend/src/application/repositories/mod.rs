mod category_gateway;

pub use category_gateway::CategoryGateway;
