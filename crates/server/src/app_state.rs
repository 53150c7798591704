use contact_api::ContactContext;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) contact: ContactContext,
    pub(crate) expose_error_details: bool,
}
