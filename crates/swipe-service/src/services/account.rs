//! Account service
//!
//! Handles signup, login, activation and verification. Credentials belong to
//! the identity provider; this service keeps the local user record in step
//! with it.

use chrono::Utc;
use tracing::{error, info, instrument, warn};

use swipe_common::validate_password_strength;
use swipe_core::entities::User;
use swipe_core::error::DomainError;
use swipe_core::value_objects::UserId;

use crate::dto::{
    LoginRequest, LoginResponse, PreferencesResponse, ProfileResponse, SignupRequest,
    UserDetailResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account.
    ///
    /// The identity provider assigns the id. If the local record cannot be
    /// saved the provider account is deleted again.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<UserResponse> {
        validate_password_strength(&request.password)?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::conflict("Username already registered"));
        }

        let identity = self.ctx.identity();
        let external_id = identity
            .create_account(&request.username, request.email.as_deref())
            .await?;

        let user_id = match UserId::parse(&external_id) {
            Ok(id) => id,
            Err(e) => {
                self.compensate(&external_id).await;
                return Err(ServiceError::internal(format!(
                    "identity provider returned a non-UUID id: {e}"
                )));
            }
        };

        if let Err(e) = identity.set_credential(&external_id, &request.password).await {
            self.compensate(&external_id).await;
            return Err(e.into());
        }

        let user = User::new(user_id, request.username, request.email);
        if let Err(e) = self.ctx.user_repo().create(&user).await {
            self.compensate(&external_id).await;
            return Err(e.into());
        }

        info!(user_id = %user.id, "Account created");
        Ok(UserResponse::from(&user))
    }

    /// Remove a provider account after a failed signup step
    async fn compensate(&self, external_id: &str) {
        if let Err(e) = self.ctx.identity().delete_account(external_id).await {
            error!(external_id = %external_id, error = %e, "Failed to delete identity account after signup failure");
        } else {
            warn!(external_id = %external_id, "Rolled back identity account after signup failure");
        }
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username");
                ServiceError::from(DomainError::InvalidCredentials)
            })?;

        if !user.is_active {
            warn!(user_id = %user.id, "Login rejected: account inactive");
            return Err(DomainError::AccountInactive.into());
        }

        let token = self
            .ctx
            .identity()
            .authenticate(&request.username, &request.password)
            .await?;

        let now = Utc::now();
        self.ctx.user_repo().touch_last_login(user.id, now).await?;
        user.record_login(now);

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            access_token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserResponse::from(&user),
        })
    }

    /// Activate an account so it can log in and becomes discoverable
    #[instrument(skip(self))]
    pub async fn activate(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self.ctx.user_repo().set_active(user_id, true).await?;
        info!(user_id = %user_id, "Account activated");
        Ok(UserResponse::from(&user))
    }

    /// Mark a user as verified. The first verification time is kept.
    #[instrument(skip(self))]
    pub async fn verify(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self.ctx.user_repo().mark_verified(user_id, Utc::now()).await?;
        info!(user_id = %user_id, "Account verified");
        Ok(UserResponse::from(&user))
    }

    /// Current user with profile and preferences
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: UserId) -> ServiceResult<UserDetailResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::UserNotFound(user_id)))?;

        let (profile, preferences) = futures::try_join!(
            self.ctx.profile_repo().find_by_user(user_id),
            self.ctx.preferences_repo().find_by_user(user_id),
        )?;

        Ok(UserDetailResponse {
            user: UserResponse::from(&user),
            profile: profile.as_ref().map(ProfileResponse::from),
            preferences: preferences.as_ref().map(PreferencesResponse::from),
        })
    }

    /// Resolve a bearer token to the local user id
    ///
    /// Inactive tokens and non-UUID subjects are rejected as invalid tokens.
    #[instrument(skip(self, token))]
    pub async fn authenticate_token(&self, token: &str) -> ServiceResult<UserId> {
        let introspection = self.ctx.identity().validate_token(token).await?;

        let subject = introspection
            .subject
            .filter(|_| introspection.active)
            .ok_or(ServiceError::App(swipe_common::AppError::InvalidToken))?;

        UserId::parse(&subject).map_err(|_| ServiceError::App(swipe_common::AppError::InvalidToken))
    }
}
