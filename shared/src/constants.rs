pub const REGISTER_USER_ENDPOINT: &str = "/api/register-user";

/// localStorage key holding the visitor's serialized session record.
pub const SESSION_STORAGE_KEY: &str = "taqueria-user";

pub const MISSING_FIELDS_ERROR: &str = "Por favor completa todos los campos.";
pub const MISSING_CONSENT_ERROR: &str = "Debes aceptar recibir comunicaciones para continuar.";
pub const ALREADY_REGISTERED_ERROR: &str = "Ya estás registrado.";
pub const NOT_REGISTERED_ERROR: &str = "Primero necesitas registrarte.";
pub const NOT_ELIGIBLE_ERROR: &str = "Todavía no puedes girar.";
pub const STORAGE_ERROR: &str = "No se pudo guardar tu sesión.";

pub const REGISTERED_MESSAGE: &str = "Usuario registrado exitosamente";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "Usuario ya registrado";

pub const SHARE_MESSAGE: &str = "¡Estoy probando suerte en Tacos al Carbon y Salsas Bravas! 🌮🎰";

pub const NO_PRIZE_LABEL: &str = "😞 Sin Premio";
pub const CLAIM_CODE_PREFIX: &str = "TACO-";
