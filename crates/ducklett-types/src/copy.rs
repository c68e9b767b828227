//! User-facing text. Ducklett only speaks Spanish.

pub const GREETING: &str =
    "¡Hola! Soy Ducklett, el Pokémon pato acuático. ¿Te gustaría conversar conmigo?";
pub const EXCITED: &str = "¡Genial! Ducklett está emocionado de hablar contigo.";
pub const ALREADY_BOOKED: &str = "¡Ya tienes una cita programada con Ducklett!";
pub const SAD_INDICATOR: &str = "¡Ducklett está triste!";
pub const EASTER_EGG: &str = "¡Cuac! ¡Me haces cosquillas!";

pub const MISSING_FIELD: &str = "Por favor, selecciona una fecha y hora.";
pub const INVALID_FORMAT: &str = "La fecha u hora no es válida.";
pub const PAST_OR_PRESENT: &str = "Elige un momento futuro para tu cita con Ducklett.";
pub const SAVE_FAILED: &str = "No se pudo guardar la cita.";
pub const CLEAR_FAILED: &str = "No se pudo borrar la cita.";

pub const YES_LABEL: &str = "Sí";
pub const NO_LABEL: &str = "No";
pub const NO_LABEL_TEARFUL: &str = "No 😢";
pub const NO_LABEL_SOBBING: &str = "No 😭";

pub const DATE_LABEL: &str = "Fecha";
pub const TIME_LABEL: &str = "Hora";
pub const CONFIRM_LABEL: &str = "Confirmar cita";
pub const RESET_LABEL: &str = "Reiniciar";

pub const NO_APPOINTMENT: &str = "Todavía no tienes una cita con Ducklett.";
pub const APPOINTMENT_CLEARED: &str = "Tu cita con Ducklett se ha borrado.";
pub const PAST_NOTE: &str = "(ya pasó)";
pub const THEME_LABEL: &str = "Tema";

/// Floating reactions shown when the visitor says no
pub const SAD_MESSAGES: [&str; 10] = [
    "¡Ducklett está triste!",
    "¡No me ignores!",
    "¿Por qué me rechazas?",
    "¡Quiero ser tu amigo!",
    "¡Vamos, di que sí!",
    "¡No seas así!",
    "¡Por favor!",
    "Ducklett se pondrá a llorar...",
    "¡Eres cruel!",
    "¡Esto duele!",
];
