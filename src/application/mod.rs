mod redirect_service;

pub use redirect_service::{Evaluation, RawRequest, RedirectService};
