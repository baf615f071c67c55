pub use super::application::Entity as Application;
pub use super::candidat::Entity as Candidat;
pub use super::emploi::Entity as Emploi;
pub use super::entreprise::Entity as Entreprise;
pub use super::job::Entity as Job;
pub use super::user::Entity as User;
