pub mod authenticate_password;
