// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::UserId;
use crate::infrastructure::security::claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Fact, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Activation links stay valid for a day.
pub const ACTIVATION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
    Activation,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
            TokenKind::Activation => "activation",
        }
    }
}

#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(
        private_key_hex: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            access_ttl,
            refresh_ttl,
        })
    }

    fn mint(
        &self,
        kind: TokenKind,
        user_id: UserId,
        ttl: Duration,
        extra: Option<&TokenSubject>,
    ) -> ApplicationResult<(String, SystemTime, SystemTime)> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(kind, user_id, issued_at, expires_at, extra);
        let serialized = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;
        Ok((serialized, issued_at, expires_at))
    }

    /// Verifies signature, time checks and token kind, returning the
    /// authority facts.
    fn verify(&self, token: &str, kind: TokenKind) -> ApplicationResult<Vec<Fact>> {
        let reject = |err: String| match kind {
            TokenKind::Activation => ApplicationError::validation(format!(
                "invalid or expired activation token: {err}"
            )),
            _ => ApplicationError::unauthorized(err),
        };

        let biscuit = Biscuit::from_base64(token, self.public).map_err(|err| reject(err.to_string()))?;

        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("kind".to_string(), kind.as_str().into());
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code_with_params("allow if token_type({kind});", params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| reject(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| reject(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| reject(err.to_string()))?;
        let (facts, _, _, _) = view.dump();
        Ok(facts)
    }
}

fn build_code_and_params(
    kind: TokenKind,
    user_id: UserId,
    issued_at: SystemTime,
    expires_at: SystemTime,
    subject: Option<&TokenSubject>,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(user_id).into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params.insert("kind".to_string(), kind.as_str().into());

    let mut code = String::from(
        r#"
                subject({uid});
                issued_at({issued});
                expires_at({exp});
                token_type({kind});
                check if time($now), $now >= {issued};
                check if time($now), $now <= {exp};
                "#,
    );

    if let Some(subject) = subject {
        code.push_str("email({email});\nrole({urole});\n");
        params.insert("email".to_string(), subject.email.clone().into());
        params.insert("urole".to_string(), subject.role.as_str().into());

        let mut capabilities: Vec<_> = subject.capabilities.iter().collect();
        capabilities.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
        for (index, cap) in capabilities.into_iter().enumerate() {
            let res = format!("res{index}");
            let act = format!("act{index}");
            code.push_str(&format!("right({{{res}}}, {{{act}}});\n"));
            params.insert(res, cap.resource.clone().into());
            params.insert(act, cap.action.clone().into());
        }
    }

    (code, params)
}

fn seal_and_serialize(token: Biscuit) -> Result<String, ApplicationError> {
    let sealed = token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    sealed
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .unwrap_or_else(|_| ChronoDuration::seconds(ttl.as_secs() as i64))
        .num_seconds()
        .max(0)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> Result<String, ApplicationError> {
    let builder = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    let token = builder
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    seal_and_serialize(token)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let (token, issued_at, expires_at) = self.mint(
            TokenKind::Access,
            subject.user_id,
            self.access_ttl,
            Some(&subject),
        )?;
        let (refresh_token, _, _) =
            self.mint(TokenKind::Refresh, subject.user_id, self.refresh_ttl, None)?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.access_ttl),
            refresh_token: Some(refresh_token),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let facts = self.verify(token, TokenKind::Access)?;
        claims::parse_claims(facts)
    }

    async fn issue_activation(&self, user_id: UserId) -> ApplicationResult<String> {
        let (token, _, _) = self.mint(TokenKind::Activation, user_id, ACTIVATION_TTL, None)?;
        Ok(token)
    }

    async fn verify_activation(&self, token: &str) -> ApplicationResult<UserId> {
        let facts = self.verify(token, TokenKind::Activation)?;
        claims::parse_subject(facts)
    }

    async fn verify_refresh(&self, token: &str) -> ApplicationResult<UserId> {
        let facts = self.verify(token, TokenKind::Refresh)?;
        claims::parse_subject(facts)
    }
}
