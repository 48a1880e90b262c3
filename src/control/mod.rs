pub mod environment;
pub mod landing;
pub mod parachute;
pub mod propulsion;
pub mod rocket;
