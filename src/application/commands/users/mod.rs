mod activate;
mod bootstrap;
mod login;
mod password;
mod profile;
mod refresh;
mod register;
mod service;

pub use bootstrap::BootstrapAdminCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use password::MIN_PASSWORD_LENGTH;
pub use profile::UpdateProfileCommand;
pub use refresh::RefreshTokenCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
