mod redirect_resolver;

pub use redirect_resolver::RedirectResolver;
