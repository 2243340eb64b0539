use crate::domain::repository::CooperativeRepository;
use crate::domain::types::Cooperative;
use crate::error::MarketplaceError;

pub struct ListCooperativesUseCase<R: CooperativeRepository> {
    pub cooperatives: R,
}

impl<R: CooperativeRepository> ListCooperativesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Cooperative>, MarketplaceError> {
        self.cooperatives.list().await
    }
}
