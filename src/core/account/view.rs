/// Sub-view shown in the signed-out account area.
///
/// Shared between the sign-in form and its sibling views; each view may
/// select another one but never reads it to make decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LoginView {
    #[default]
    SignIn,
    Register,
    ForgotPassword,
}

impl LoginView {
    pub fn title(self) -> &'static str {
        match self {
            LoginView::SignIn => "Welcome back",
            LoginView::Register => "Become a member",
            LoginView::ForgotPassword => "Reset your password",
        }
    }
}
