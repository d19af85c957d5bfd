use crate::domain::model::{Availability, Venue};

/// 固定的場地目錄，程式生命週期內不變
#[derive(Debug, Clone)]
pub struct VenueCatalog {
    venues: Vec<Venue>,
}

impl VenueCatalog {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    pub fn sample() -> Self {
        Self::new(sample_venues())
    }

    pub fn all(&self) -> &[Venue] {
        &self.venues
    }

    pub fn get(&self, id: u32) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

impl Default for VenueCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_venue(
    id: u32,
    name: &str,
    location: &str,
    venue_type: &str,
    capacity: u32,
    price: &str,
    features: &[&str],
    rating: f32,
    availability: Availability,
) -> Venue {
    Venue {
        id,
        name: name.to_string(),
        location: location.to_string(),
        venue_type: venue_type.to_string(),
        capacity,
        price: price.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        rating,
        availability,
        lat: None,
        lon: None,
        booked_dates: Vec::new(),
    }
}

fn sample_venues() -> Vec<Venue> {
    vec![
        sample_venue(
            1,
            "Kigali Convention Centre",
            "Kigali City Center",
            "convention",
            500,
            "500,000 - 1,000,000 RWF",
            &["Parking", "AC", "Sound System", "Catering"],
            4.8,
            Availability::Available,
        ),
        sample_venue(
            2,
            "Serena Hotel",
            "Kiyovu",
            "garden",
            200,
            "300,000 - 600,000 RWF",
            &["Garden", "Parking", "Catering", "Photography"],
            4.6,
            Availability::Busy,
        ),
        sample_venue(
            3,
            "Marriott Hotel",
            "City Center",
            "hall",
            300,
            "400,000 - 800,000 RWF",
            &["AC", "Sound System", "Lighting", "Parking"],
            4.7,
            Availability::Available,
        ),
        sample_venue(
            4,
            "Nyanza Cultural Site",
            "Nyanza",
            "cultural",
            150,
            "150,000 - 300,000 RWF",
            &["Traditional Setup", "Parking", "Cultural Activities"],
            4.3,
            Availability::Booked,
        ),
    ]
}
