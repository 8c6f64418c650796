use std::fmt::{self, Display};

pub const DEFAULT_TIMER_MS: u32 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertIcon {
    Error,
    Warning,
    Success
}

impl Display for AlertIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            AlertIcon::Error => "error",
            AlertIcon::Warning => "warning",
            AlertIcon::Success => "success"
        };

        write!(f, "{}", icon)
    }
}

/// Client side alert shown after a form submission, followed by a redirect to `/{ruta}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub icon: AlertIcon,
    pub show_confirm_button: bool,
    pub timer_ms: u32,
    pub ruta: String
}

impl Notification {
    pub fn new<S>(title: S, message: S, icon: AlertIcon, ruta: S) -> Self
    where S: Into<String>
    {
        Self {
            title: title.into(),
            message: message.into(),
            icon,
            // success alerts close by themselves, the others wait for the user
            show_confirm_button: icon != AlertIcon::Success,
            timer_ms: DEFAULT_TIMER_MS,
            ruta: ruta.into()
        }
    }

    pub fn registration_failed() -> Self {
        Self::new("Error", "Registro incorrecto!", AlertIcon::Error, "register")
    }

    pub fn registration_succeeded() -> Self {
        Self::new("Registro creado!", "Registro exitoso!", AlertIcon::Success, "login")
    }

    pub fn missing_credentials() -> Self {
        Self::new("Advertencia", "¡Por favor ingrese un nombre y/o identificacion valida!", AlertIcon::Warning, "login")
    }

    pub fn invalid_credentials() -> Self {
        Self::new("Error", "Nombre y/o identificacion incorrecto", AlertIcon::Error, "login")
    }

    pub fn login_succeeded() -> Self {
        Self::new("Conexión Exitosa", "Inicio de sesion exitoso!", AlertIcon::Success, "")
    }

    pub fn redirect_path(&self) -> String {
        format!("/{}", self.ruta)
    }
}
