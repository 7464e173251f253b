//! Point-of-interest categories used by search filters and place results.

// self
use crate::_prelude::*;

def_str_enum! {
	/// Point-of-interest categories accepted by search filters and reported on places.
	PoiCategory {
		Airport => "Airport",
		AirportGate => "AirportGate",
		AirportTerminal => "AirportTerminal",
		AmusementPark => "AmusementPark",
		AnimalService => "AnimalService",
		Aquarium => "Aquarium",
		Atm => "ATM",
		AutomotiveRepair => "AutomotiveRepair",
		Bakery => "Bakery",
		Bank => "Bank",
		Baseball => "Baseball",
		Basketball => "Basketball",
		Beach => "Beach",
		Beauty => "Beauty",
		Bowling => "Bowling",
		Brewery => "Brewery",
		Cafe => "Cafe",
		Campground => "Campground",
		CarRental => "CarRental",
		Castle => "Castle",
		ConventionCenter => "ConventionCenter",
		Distillery => "Distillery",
		EvCharger => "EVCharger",
		Fairground => "Fairground",
		FireStation => "FireStation",
		Fishing => "Fishing",
		FitnessCenter => "FitnessCenter",
		FoodMarket => "FoodMarket",
		Fortress => "Fortress",
		GasStation => "GasStation",
		GoKart => "GoKart",
		Golf => "Golf",
		Hiking => "Hiking",
		Hospital => "Hospital",
		Hotel => "Hotel",
		Kayaking => "Kayaking",
		Landmark => "Landmark",
		Laundry => "Laundry",
		Library => "Library",
		Mailbox => "Mailbox",
		Marina => "Marina",
		MiniGolf => "MiniGolf",
		MovieTheater => "MovieTheater",
		Museum => "Museum",
		MusicVenue => "MusicVenue",
		NationalMonument => "NationalMonument",
		NationalPark => "NationalPark",
		Nightlife => "Nightlife",
		Park => "Park",
		Parking => "Parking",
		Pharmacy => "Pharmacy",
		Planetarium => "Planetarium",
		Playground => "Playground",
		Police => "Police",
		PostOffice => "PostOffice",
		PublicTransport => "PublicTransport",
		ReligiousSite => "ReligiousSite",
		Restaurant => "Restaurant",
		Restroom => "Restroom",
		RockClimbing => "RockClimbing",
		RvPark => "RVPark",
		School => "School",
		SkatePark => "SkatePark",
		Skating => "Skating",
		Skiing => "Skiing",
		Soccer => "Soccer",
		Spa => "Spa",
		Stadium => "Stadium",
		Store => "Store",
		Surfing => "Surfing",
		Swimming => "Swimming",
		Tennis => "Tennis",
		Theater => "Theater",
		University => "University",
		Volleyball => "Volleyball",
		Winery => "Winery",
		Zoo => "Zoo",
	}
}
