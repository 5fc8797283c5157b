/// Use cases module containing application business logic orchestration
mod generate_attribution;

pub use generate_attribution::GenerateAttributionUseCase;
