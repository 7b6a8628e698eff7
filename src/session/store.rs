use crate::api::{AdminApi, CoupleApi, VendorApi, WeddingApi};
use crate::config::SessionConfig;
use crate::error::AppError;
use crate::models::couple::CoupleRegistration;
use crate::models::identity::{Identity, Role, SessionRecord};
use crate::models::vendor::VendorRegistration;
use crate::session::clock::Clock;
use crate::session::storage::SessionStorage;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{info, warn};
use validator::Validate;

/// Storage key holding the serialized identity.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Storage key holding the millis-since-epoch validation timestamp.
pub const SESSION_TIME_KEY: &str = "sessionTime";
/// Key written by an older login screen for admin sessions only; adopted
/// into the unified pair on load and then deleted.
pub const LEGACY_ADMIN_KEY: &str = "adminUser";

/// Everything the session store needs from the data-access layer.
pub trait AuthBackend: CoupleApi + VendorApi + WeddingApi + AdminApi + Send + Sync {}

impl<T> AuthBackend for T where T: CoupleApi + VendorApi + WeddingApi + AdminApi + Send + Sync {}

/// Registration payload, tagged by the role it creates.
#[derive(Debug, Clone)]
pub enum RegistrationForm {
    Couple(CoupleRegistration),
    Vendor(VendorRegistration),
}

impl RegistrationForm {
    pub fn role(&self) -> Role {
        match self {
            RegistrationForm::Couple(_) => Role::Couple,
            RegistrationForm::Vendor(_) => Role::Vendor,
        }
    }

    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            RegistrationForm::Couple(form) => form.validate(),
            RegistrationForm::Vendor(form) => form.validate(),
        }
    }

    fn into_identity(self, id: String) -> Identity {
        match self {
            RegistrationForm::Couple(form) => form.into_identity(id),
            RegistrationForm::Vendor(form) => form.into_identity(id),
        }
    }
}

/// Single owner of the signed-in identity. Holds it in memory for the
/// app's lifetime and mirrors it to session storage with a validation
/// timestamp; every screen reads snapshots through `current`.
pub struct SessionStore {
    backend: Arc<dyn AuthBackend>,
    storage: Arc<dyn SessionStorage>,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
    current: Mutex<Option<Identity>>,
    ready: AtomicBool,
}

impl SessionStore {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        storage: Arc<dyn SessionStorage>,
        clock: Arc<dyn Clock>,
        config: SessionConfig,
    ) -> Self {
        Self {
            backend,
            storage,
            clock,
            config,
            current: Mutex::new(None),
            ready: AtomicBool::new(false),
        }
    }

    /// Whether the restore-on-load check has completed. Route evaluation
    /// must treat `false` as "still loading".
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Snapshot of the signed-in identity, if any.
    pub fn current(&self) -> Option<Identity> {
        self.lock_current().clone()
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<Identity>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn window_millis(&self) -> i64 {
        self.config.window_minutes * 60 * 1000
    }

    /// Restore a persisted session if it is still inside the validity
    /// window, refreshing the timestamp (sliding expiry). Always flips the
    /// readiness flag, even when restoration fails.
    pub async fn initialize(&self) -> Result<Option<Identity>, AppError> {
        let restored = self.restore();
        self.ready.store(true, Ordering::SeqCst);
        restored
    }

    fn restore(&self) -> Result<Option<Identity>, AppError> {
        self.adopt_legacy_admin_record()?;

        let (Some(raw_identity), Some(raw_time)) =
            (self.storage.get(CURRENT_USER_KEY)?, self.storage.get(SESSION_TIME_KEY)?)
        else {
            self.purge()?;
            return Ok(None);
        };

        let Ok(timestamp_millis) = raw_time.trim().parse::<i64>() else {
            warn!("unreadable session timestamp, clearing session");
            self.purge()?;
            return Ok(None);
        };

        let identity: Identity = match serde_json::from_str(&raw_identity) {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "unreadable stored identity, clearing session");
                self.purge()?;
                return Ok(None);
            }
        };

        let now = self.clock.now_millis();
        let record = SessionRecord {
            identity,
            timestamp_millis,
        };
        if !record.is_valid(now, self.window_millis()) {
            info!("session expired, logging out");
            self.purge()?;
            return Ok(None);
        }

        // Still valid: extend the window from now.
        self.storage.set(SESSION_TIME_KEY, &now.to_string())?;
        info!(role = %record.identity.role, id = %record.identity.id, "session restored");
        *self.lock_current() = Some(record.identity.clone());
        Ok(Some(record.identity))
    }

    /// An old login screen stored admin sessions under their own key with
    /// no timestamp. When the unified key is absent, adopt the record with
    /// a fresh timestamp; either way the legacy key is deleted.
    fn adopt_legacy_admin_record(&self) -> Result<(), AppError> {
        let Some(raw) = self.storage.get(LEGACY_ADMIN_KEY)? else {
            return Ok(());
        };
        self.storage.remove(LEGACY_ADMIN_KEY)?;

        if self.storage.get(CURRENT_USER_KEY)?.is_some() {
            return Ok(());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(mut record)) => {
                record.entry("userType").or_insert(Value::String("admin".to_string()));
                let unified = serde_json::to_string(&Value::Object(record))?;
                self.storage.set(CURRENT_USER_KEY, &unified)?;
                self.storage.set(SESSION_TIME_KEY, &self.clock.now_millis().to_string())?;
                info!("migrated legacy admin session to the unified keys");
            }
            _ => {
                warn!("discarding unreadable legacy admin session");
            }
        }
        Ok(())
    }

    /// Authenticate against the fetched collection for the role, or the
    /// admin login endpoint. Nothing is persisted until a match succeeds.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<Identity, AppError> {
        let identity = match role {
            Role::Couple => self.login_couple(email, password).await?,
            Role::Vendor => self.login_vendor(email, password).await?,
            Role::Admin => self.login_admin(email, password).await?,
        };

        self.persist(&identity)?;
        info!(role = %identity.role, id = %identity.id, "login succeeded");
        Ok(identity)
    }

    async fn login_couple(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        let couples = self.backend.list_couples().await?;
        let matched = couples
            .into_iter()
            .find(|c| c.email.as_deref() == Some(email) && c.password.as_deref() == Some(password));
        let Some(couple) = matched else {
            warn!("couple login failed: no matching credentials");
            return Err(AppError::InvalidCredentials);
        };

        // The wedding lives in its own collection, keyed back to the couple.
        let weddings = self.backend.list_weddings().await?;
        let wedding_id = weddings
            .into_iter()
            .find(|w| w.couple_id.as_deref() == Some(couple.id.as_str()))
            .map(|w| w.wedding_id)
            .filter(|id| !id.is_empty());

        let mut identity = Identity::new(couple.id, Role::Couple);
        identity.email = couple.email;
        identity.name = couple.name;
        identity.phone = couple.phone;
        identity.partner_id = couple.partner_id;
        identity.budget = couple.budget;
        identity.wedding_date = couple.wedding_date;
        identity.wedding_id = wedding_id;
        Ok(identity)
    }

    async fn login_vendor(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        let vendors = self.backend.list_vendors().await?;
        let matched = vendors
            .into_iter()
            .find(|v| v.email.as_deref() == Some(email) && v.password.as_deref() == Some(password));
        let Some(vendor) = matched else {
            warn!("vendor login failed: no matching credentials");
            return Err(AppError::InvalidCredentials);
        };

        let mut identity = Identity::new(vendor.id, Role::Vendor);
        identity.email = vendor.email;
        identity.name = vendor.name;
        identity.phone = vendor.phone;
        identity.vendor_type = vendor.vendor_type;
        identity.description = vendor.description;
        identity.address = vendor.address;
        Ok(identity)
    }

    async fn login_admin(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        let admin = self.backend.admin_login(email, password).await?;
        let mut identity = Identity::new(admin.id, Role::Admin);
        identity.email = admin.email.or_else(|| Some(email.to_string()));
        identity.name = admin.name;
        identity.phone = admin.phone;
        Ok(identity)
    }

    /// Registration is simulated client-side: after the fixed artificial
    /// delay the merged identity is signed in directly.
    pub async fn register(&self, form: RegistrationForm) -> Result<Identity, AppError> {
        form.validate()?;

        tokio::time::sleep(Duration::from_millis(self.config.register_delay_ms)).await;

        let id = form.role().id_with_suffix(self.clock.now_millis());
        let identity = form.into_identity(id);
        self.persist(&identity)?;
        info!(role = %identity.role, id = %identity.id, "registration complete");
        Ok(identity)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        *self.lock_current() = None;
        self.purge()?;
        info!("logged out");
        Ok(())
    }

    fn persist(&self, identity: &Identity) -> Result<(), AppError> {
        let serialized = serde_json::to_string(identity)?;
        self.storage.set(CURRENT_USER_KEY, &serialized)?;
        self.storage.set(SESSION_TIME_KEY, &self.clock.now_millis().to_string())?;
        *self.lock_current() = Some(identity.clone());
        Ok(())
    }

    fn purge(&self) -> Result<(), AppError> {
        self.storage.remove(CURRENT_USER_KEY)?;
        self.storage.remove(SESSION_TIME_KEY)?;
        // A leftover legacy key would be re-adopted on the next load.
        self.storage.remove(LEGACY_ADMIN_KEY)?;
        Ok(())
    }
}
