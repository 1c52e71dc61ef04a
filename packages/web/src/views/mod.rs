mod home;
pub use home::Home;

mod sign_in;
pub use sign_in::SignIn;

mod notes;
pub use notes::Notes;
