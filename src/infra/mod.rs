pub mod openweathermap;
