mod ids;
mod show;

pub use ids::ShowId;
pub use show::ShowMetadata;
