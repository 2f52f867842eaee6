use std::path::Path;

use crate::auth::{AuthGate, Session, PASSWORD_RESET_NOTICE};
use crate::chart::{ChartKind, ChartOutcome};
use crate::config::AppConfig;
use crate::data::loader::{load_path, load_remote, LoadError};
use crate::data::model::Table;
use crate::data::select::ColumnSelection;
use crate::viz::{plan_comparison, plan_side_by_side, plan_static, PlanWarning};

// ---------------------------------------------------------------------------
// Small state enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

/// Feedback line shown after an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationMode {
    #[default]
    Static,
    Dynamic,
}

impl VisualizationMode {
    pub fn label(self) -> &'static str {
        match self {
            VisualizationMode::Static => "📈 Static Visualization",
            VisualizationMode::Dynamic => "📉 Dynamic Visualization",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonLayout {
    /// One chart over the aligned pair of picked columns.
    #[default]
    Aligned,
    /// One line chart per dataset, each at full length.
    SideBySide,
}

/// Which of the two upload slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upload {
    First,
    Second,
}

impl Upload {
    pub const BOTH: [Upload; 2] = [Upload::First, Upload::Second];

    fn index(self) -> usize {
        match self {
            Upload::First => 0,
            Upload::Second => 1,
        }
    }

    pub fn ordinal(self) -> &'static str {
        match self {
            Upload::First => "first",
            Upload::Second => "second",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Upload::First => "Upload the first CSV file",
            Upload::Second => "Upload the second CSV file",
        }
    }
}

/// The remote dataset, fetched once per login.
#[derive(Debug, Clone, Default)]
pub enum RemoteDataset {
    #[default]
    NotLoaded,
    Loaded(Table),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// One uploaded file and the picks made against it.
#[derive(Debug, Clone, Default)]
pub struct UploadSlot {
    pub file_name: Option<String>,
    pub table: Option<Table>,
    pub error: Option<String>,
    /// Multi-pick used by the side-by-side layout.
    pub selection: ColumnSelection,
    /// Single pick used by the aligned layout.
    pub pick: Option<String>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Each `pub fn` taking
/// `&mut self` handles one user interaction and never fails: errors end up
/// in [`AppState::status`] or in an upload slot.
pub struct AppState {
    pub config: AppConfig,
    gate: AuthGate,
    pub session: Session,
    pub login_form: LoginForm,
    pub status: Option<StatusMessage>,

    pub mode: VisualizationMode,
    pub remote: RemoteDataset,
    pub static_selection: ColumnSelection,
    pub static_kind: ChartKind,

    pub uploads: [UploadSlot; 2],
    pub layout: ComparisonLayout,
    pub compare_kind: ChartKind,

    /// Last chart request result, kept until the next press.
    pub outcome: Option<ChartOutcome>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let gate = AuthGate::new(config.credentials.clone());
        Self {
            config,
            gate,
            session: Session::new(),
            login_form: LoginForm::default(),
            status: None,
            mode: VisualizationMode::default(),
            remote: RemoteDataset::default(),
            static_selection: ColumnSelection::default(),
            static_kind: ChartKind::default(),
            uploads: Default::default(),
            layout: ComparisonLayout::default(),
            compare_kind: ChartKind::default(),
            outcome: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated(&self.session)
    }

    pub fn upload(&self, slot: Upload) -> &UploadSlot {
        &self.uploads[slot.index()]
    }

    pub fn upload_mut(&mut self, slot: Upload) -> &mut UploadSlot {
        &mut self.uploads[slot.index()]
    }

    // ---- Login gate ----

    /// Check the login form. The password field is cleared either way.
    pub fn submit_login(&mut self) {
        let password = std::mem::take(&mut self.login_form.password);
        let username = self.login_form.username.clone();

        match self.gate.login(&mut self.session, &username, &password) {
            Ok(()) => {
                log::info!("User '{username}' logged in");
                self.status = Some(StatusMessage::new(
                    StatusLevel::Success,
                    format!("🎉 Welcome {username}! You are logged in."),
                ));
            }
            Err(e) => {
                log::warn!("Rejected login attempt for '{username}'");
                self.status = Some(StatusMessage::new(StatusLevel::Error, format!("🚫 {e}")));
            }
        }
    }

    pub fn forgot_password(&mut self) {
        self.status = Some(StatusMessage::new(StatusLevel::Warning, PASSWORD_RESET_NOTICE));
    }

    /// Back to the login screen; everything loaded for the session is dropped.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.username() {
            log::info!("User '{user}' logged out");
        }
        self.gate.logout(&mut self.session);

        self.login_form = LoginForm::default();
        self.remote = RemoteDataset::NotLoaded;
        self.static_selection.clear();
        self.uploads = Default::default();
        self.outcome = None;
        self.status = Some(StatusMessage::new(
            StatusLevel::Success,
            "You have logged out successfully.",
        ));
    }

    // ---- Remote dataset ----

    /// Fetch the remote dataset if this session has not tried yet.
    pub fn ensure_dataset(&mut self) {
        if !self.is_authenticated() || !matches!(self.remote, RemoteDataset::NotLoaded) {
            return;
        }
        self.remote = match load_remote(&self.config.data_url) {
            Ok(table) => RemoteDataset::Loaded(table),
            Err(e) => {
                log::error!("Failed to load {}: {e}", self.config.data_url);
                RemoteDataset::Failed(format!(
                    "Error: Could not load the dataset from the URL. Details: {e}"
                ))
            }
        };
    }

    pub fn retry_dataset(&mut self) {
        self.remote = RemoteDataset::NotLoaded;
        self.ensure_dataset();
    }

    // ---- Visualization ----

    pub fn set_mode(&mut self, mode: VisualizationMode) {
        if self.mode != mode {
            self.mode = mode;
            self.outcome = None;
        }
    }

    pub fn show_static(&mut self) {
        let RemoteDataset::Loaded(table) = &self.remote else {
            return;
        };
        self.outcome = Some(plan_static(table, &self.static_selection, self.static_kind));
    }

    /// Record the result of reading one upload slot.
    pub fn apply_upload(&mut self, slot: Upload, file_name: String, loaded: Result<Table, LoadError>) {
        let upload = self.upload_mut(slot);
        match loaded {
            Ok(table) => {
                log::info!(
                    "Loaded upload '{file_name}': {} rows x {} columns",
                    table.row_count(),
                    table.column_count()
                );
                upload.selection.retain_known(&table);
                if upload.pick.as_deref().is_some_and(|p| table.column(p).is_none()) {
                    upload.pick = None;
                }
                upload.table = Some(table);
                upload.error = None;
            }
            Err(e) => {
                log::error!("Failed to load upload '{file_name}': {e}");
                upload.table = None;
                upload.error = Some(format!(
                    "Error: Could not read '{file_name}'. Details: {e}"
                ));
            }
        }
        upload.file_name = Some(file_name);
        self.outcome = None;
    }

    pub fn upload_from_path(&mut self, slot: Upload, path: &Path) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.apply_upload(slot, file_name, load_path(path));
    }

    pub fn comparison_ready(&self) -> bool {
        self.uploads.iter().all(|u| u.table.is_some())
    }

    pub fn compare(&mut self) {
        let [first, second] = &self.uploads;
        let (Some(table_a), Some(table_b)) = (&first.table, &second.table) else {
            self.outcome = Some(ChartOutcome::Warning(PlanWarning::MissingUpload));
            return;
        };

        let outcome = match self.layout {
            ComparisonLayout::Aligned => plan_comparison(
                table_a,
                first.pick.as_deref(),
                table_b,
                second.pick.as_deref(),
                self.compare_kind,
            ),
            ComparisonLayout::SideBySide => {
                plan_side_by_side(table_a, &first.selection, table_b, &second.selection)
            }
        };
        self.outcome = Some(outcome);
    }
}
