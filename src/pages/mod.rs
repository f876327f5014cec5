mod donor;
mod landing;
mod not_found;
mod recipient;
mod sign_in;

pub use donor::DonorDashboard;
pub use landing::Landing;
pub use not_found::NotFound;
pub use recipient::RecipientDashboard;
pub use sign_in::SignIn;
