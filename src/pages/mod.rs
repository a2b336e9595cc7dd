//! Page components for campusgate.

mod create_account;
mod forget_password;
mod login;
mod otp;

pub use create_account::CreateAccount;
pub use forget_password::ForgetPassword;
pub use login::Login;
pub use otp::Otp;
