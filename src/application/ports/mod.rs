pub mod in_ports;

pub use in_ports::UserAuthenticationUseCase;
pub use in_ports::UserPasswordUseCase;
pub use in_ports::UserProfileUseCase;
pub use in_ports::UserRegistrationUseCase;
