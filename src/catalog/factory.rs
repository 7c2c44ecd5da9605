use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogStore;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::members::factory::create_member_repository;

pub fn create_catalog_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn CatalogService> {
    let book_repo = create_book_repository();
    let member_repo = create_member_repository();
    let publisher = create_publisher(via);
    Box::new(CatalogStore::new(config, book_repo, member_repo, publisher))
}
