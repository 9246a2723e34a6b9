//! Page Configuration
//!
//! Selectors, endpoints, timings and user-facing messages.

// ========================
// Storage
// ========================

/// localStorage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

// ========================
// Endpoints
// ========================

/// Like toggle endpoint, project id is appended
pub const LIKE_ENDPOINT: &str = "/api/like/";
/// Where uploaded avatars are served from
pub const UPLOADS_PREFIX: &str = "/uploads/";

// ========================
// Timings (ms)
// ========================

pub const THEME_TRANSITION_MS: u32 = 300;
pub const BACK_TO_TOP_PRESS_MS: u32 = 150;
pub const LIKE_PULSE_MS: u32 = 200;
pub const NOTIFICATION_DURATION_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 150;
pub const CLIPBOARD_NOTIFICATION_MS: u32 = 2000;
pub const SUBMIT_FALLBACK_MS: u32 = 10_000;
pub const LOADING_FADE_DELAY_MS: u32 = 800;
pub const LOADING_HIDE_MS: u32 = 500;
pub const LOADING_FALLBACK_MS: u32 = 3000;
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

// ========================
// Thresholds
// ========================

/// Scroll offset after which the back-to-top button shows
pub const BACK_TO_TOP_OFFSET_PX: f64 = 300.0;
/// Scroll offset after which the navbar is marked scrolled
pub const NAVBAR_SCROLLED_OFFSET_PX: f64 = 50.0;
/// Viewports narrower than this collapse the menu after navigation
pub const MOBILE_BREAKPOINT_PX: f64 = 992.0;
/// Hero background moves at this fraction of the scroll speed
pub const PARALLAX_RATE: f64 = -0.5;
pub const MIN_PASSWORD_LEN: usize = 6;
/// Character counter turns to a warning below this many remaining
pub const COUNTER_WARNING_REMAINING: i64 = 50;
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

// ========================
// Busy labels
// ========================

pub const SUBMIT_BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Processando..."#;
pub const COMMENT_BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-1"></i>Enviando..."#;

// ========================
// Messages
// ========================

pub const MSG_LIKE_FAILED: &str = "Erro ao curtir projeto";
pub const MSG_COMMENT_ADDED: &str = "Comentário adicionado com sucesso!";
pub const MSG_COMMENT_REJECTED: &str = "Erro ao adicionar comentário";
pub const MSG_CONNECTION_ERROR: &str = "Erro de conexão";
pub const MSG_LINK_COPIED: &str = "Link copiado!";
pub const MSG_COPY_FAILED: &str = "Erro ao copiar link";

pub const MSG_FIELD_REQUIRED: &str = "Este campo é obrigatório";
pub const MSG_INVALID_EMAIL: &str = "Email inválido";
pub const MSG_SHORT_PASSWORD: &str = "Senha deve ter pelo menos 6 caracteres";

pub const TITLE_SWITCH_TO_LIGHT: &str = "Modo claro";
pub const TITLE_SWITCH_TO_DARK: &str = "Modo escuro";
