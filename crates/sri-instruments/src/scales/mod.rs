pub mod body_shame;
pub mod kiss9;
pub mod mosher;
pub mod partner_communication;
pub mod sexual_anxiety;
pub mod sis_ses;
pub mod sos;
