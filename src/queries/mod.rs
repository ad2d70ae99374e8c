pub mod admin_queries;
pub mod category_queries;
pub mod distributor_queries;
pub mod product_queries;
pub mod quote_queries;
