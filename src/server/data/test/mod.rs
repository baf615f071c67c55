mod application;
mod candidat;
mod emploi;
mod entreprise;
mod job;
mod user;
