pub mod avr;
