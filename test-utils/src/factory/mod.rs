//! Factory methods for creating test data.
//!
//! Each collection has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Referenced ids
//! (owner, entreprise, job, candidate) are plain integers, so factories take them as
//! arguments instead of creating the referenced rows.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let entreprise = factory::create_entreprise(&db, user.id).await?;
//!
//!     // Create an application together with its job, entreprise and candidate
//!     let (job, candidat, application) =
//!         factory::helpers::create_application_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("someone@example.com")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```

pub mod application;
pub mod candidat;
pub mod emploi;
pub mod entreprise;
pub mod helpers;
pub mod job;
pub mod user;

pub use application::create_application;
pub use candidat::create_candidat;
pub use emploi::create_emploi;
pub use entreprise::create_entreprise;
pub use job::create_job;
pub use user::{create_user, create_user_with_email};
