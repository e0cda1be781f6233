pub mod samples;

use std::sync::Arc;

use vitalia_api::endpoints::destinations::Country;
use vitalia_api::endpoints::programs::{Program, ProgramCategory};
use vitalia_api::endpoints::{Amount, ProgramRef};
use vitalia_api::{ApiError, Client, Request};

pub const PLACEHOLDER_IMAGE: &str = "/images/program-placeholder.jpg";

const SUMMARY_MAX_CHARS: usize = 120;

/// Flattened program shape the explore views render.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCard {
    pub id: uuid::Uuid,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub category: &'static str,
    pub destination: String,
    pub facility: String,
    pub duration_days: u32,
    pub price: String,
    pub hero_image: String,
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramDetail {
    pub card: ProgramCard,
    pub description: String,
    pub gallery: Vec<String>,
}

/// A bookable place: one city of one country.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub city: String,
    pub country: String,
    pub label: String,
    pub program_count: u32,
    pub hero_image: String,
}

#[derive(Debug, Default, Clone)]
pub struct ProgramFilter {
    pub country: Option<String>,
    pub city: Option<String>,
    pub category: Option<ProgramCategory>,
    pub search: Option<String>,
}

impl ProgramFilter {
    pub fn matches(&self, program: &Program) -> bool {
        if let Some(country) = &self.country {
            let country = country.to_lowercase();
            if program.city.country.name.to_lowercase() != country
                && program.city.country.code.to_lowercase() != country
            {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if program.city.name.to_lowercase() != city.to_lowercase() {
                return false;
            }
        }
        if let Some(category) = self.category {
            if program.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystack = format!(
                "{} {}",
                program.title,
                program.subtitle.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
        true
    }
}

impl From<&Program> for ProgramCard {
    fn from(program: &Program) -> Self {
        let summary = program
            .subtitle
            .clone()
            .or_else(|| program.description.as_deref().map(summarize))
            .unwrap_or_default();

        Self {
            id: program.id,
            slug: program.slug.clone(),
            title: program.title.clone(),
            summary,
            category: category_label(program.category),
            destination: format!("{}, {}", program.city.name, program.city.country.name),
            facility: program.facility.name.clone(),
            duration_days: program.duration_days,
            price: format_price(program.price, &program.currency),
            hero_image: program
                .hero_image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            rating: program.rating,
        }
    }
}

impl From<Program> for ProgramDetail {
    fn from(program: Program) -> Self {
        let card = ProgramCard::from(&program);
        Self {
            card,
            description: program.description.unwrap_or_default(),
            gallery: program.gallery,
        }
    }
}

pub fn category_label(category: ProgramCategory) -> &'static str {
    match category {
        ProgramCategory::Longevity => "Longevity",
        ProgramCategory::Detox => "Detox",
        ProgramCategory::MedicalSpa => "Medical Spa",
        ProgramCategory::Fitness => "Fitness",
        ProgramCategory::MentalWellness => "Mental Wellness",
        ProgramCategory::Nutrition => "Nutrition",
        ProgramCategory::Recovery => "Recovery",
    }
}

pub fn format_price(price: Amount, currency: &str) -> String {
    if price.is_zero() {
        return "Price on request".to_string();
    }
    let major = price.as_major_f64();
    if major.fract() == 0.0 {
        format!("{:.0} {}", major, currency)
    } else {
        format!("{:.2} {}", major, currency)
    }
}

fn summarize(text: &str) -> String {
    if text.chars().count() <= SUMMARY_MAX_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{}…", cut.trim_end())
}

/// Busiest destinations first, alphabetical within a tie.
pub fn destinations_from_countries(countries: Vec<Country>) -> Vec<Destination> {
    let mut destinations = Vec::new();
    for country in countries {
        let hero_image = country
            .hero_image
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        for city in country.cities {
            destinations.push(Destination {
                label: format!("{}, {}", city.name, country.name),
                city: city.name,
                country: country.name.clone(),
                program_count: city.program_count,
                hero_image: hero_image.clone(),
            });
        }
    }
    destinations.sort_by(|a, b| {
        b.program_count
            .cmp(&a.program_count)
            .then_with(|| a.label.cmp(&b.label))
    });
    destinations
}

/// Explore-catalog access: a configured backend when there is one, the
/// built-in sample set otherwise. Remote failures surface unchanged.
pub struct Catalog {
    client: Option<Arc<Client>>,
}

impl Catalog {
    pub fn new(client: Option<Arc<Client>>) -> Self {
        Self { client }
    }

    pub fn is_remote(&self) -> bool {
        self.client.is_some()
    }

    pub async fn programs(&self, filter: &ProgramFilter) -> Result<Vec<ProgramCard>, ApiError> {
        match &self.client {
            Some(client) => {
                let mut request = Request::programs().list();
                if let Some(country) = &filter.country {
                    request = request.country(country.clone());
                }
                if let Some(city) = &filter.city {
                    request = request.city(city.clone());
                }
                if let Some(category) = filter.category {
                    request = request.category(category);
                }
                if let Some(search) = &filter.search {
                    request = request.search(search.clone());
                }

                let page = client.send(request).await?;
                Ok(page.programs.iter().map(ProgramCard::from).collect())
            }
            None => Ok(samples::programs()
                .iter()
                .filter(|program| filter.matches(program))
                .map(ProgramCard::from)
                .collect()),
        }
    }

    pub async fn program(&self, program: &str) -> Result<Option<ProgramDetail>, ApiError> {
        match &self.client {
            Some(client) => match client.send(Request::programs().get(program)).await {
                Ok(program) => Ok(Some(ProgramDetail::from(program))),
                Err(err) if err.status_code == Some(404) => Ok(None),
                Err(err) => Err(err),
            },
            None => {
                let wanted = ProgramRef::from(program);
                Ok(samples::programs()
                    .into_iter()
                    .find(|candidate| match &wanted {
                        ProgramRef::Id(id) => candidate.id == *id,
                        ProgramRef::Slug(slug) => &candidate.slug == slug,
                    })
                    .map(ProgramDetail::from))
            }
        }
    }

    pub async fn destinations(&self) -> Result<Vec<Destination>, ApiError> {
        let countries = match &self.client {
            Some(client) => client.send(Request::destinations().countries()).await?,
            None => samples::countries(),
        };
        Ok(destinations_from_countries(countries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalia_api::endpoints::destinations::{City, CitySummary, CountrySummary};
    use vitalia_api::endpoints::programs::FacilitySummary;

    fn test_program(slug: &str, category: ProgramCategory) -> Program {
        Program {
            id: uuid::Uuid::from_u128(0x10),
            slug: slug.to_string(),
            title: "Alpine Longevity Retreat".to_string(),
            subtitle: Some("Seven days of diagnostics and altitude training".to_string()),
            description: Some("A week-long clinical program.".to_string()),
            category,
            duration_days: 7,
            price: Amount::new(349900),
            currency: "CHF".to_string(),
            rating: Some(4.9),
            hero_image: None,
            gallery: vec![],
            facility: FacilitySummary {
                id: uuid::Uuid::from_u128(0x20),
                name: "Clinique Mont Clair".to_string(),
                logo: None,
            },
            city: City {
                id: uuid::Uuid::from_u128(0x30),
                name: "St. Moritz".to_string(),
                country: CountrySummary {
                    id: uuid::Uuid::from_u128(0x40),
                    name: "Switzerland".to_string(),
                    code: "ch".to_string(),
                },
            },
            featured: true,
        }
    }

    #[test]
    fn card_flattens_city_and_country() {
        let card = ProgramCard::from(&test_program("alpine", ProgramCategory::Longevity));
        assert_eq!(card.destination, "St. Moritz, Switzerland");
        assert_eq!(card.facility, "Clinique Mont Clair");
        assert_eq!(card.category, "Longevity");
        assert_eq!(card.price, "3499 CHF");
    }

    #[test]
    fn missing_hero_image_gets_placeholder() {
        let card = ProgramCard::from(&test_program("alpine", ProgramCategory::Detox));
        assert_eq!(card.hero_image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn summary_prefers_subtitle_over_description() {
        let card = ProgramCard::from(&test_program("alpine", ProgramCategory::Longevity));
        assert_eq!(
            card.summary,
            "Seven days of diagnostics and altitude training"
        );

        let mut program = test_program("alpine", ProgramCategory::Longevity);
        program.subtitle = None;
        let card = ProgramCard::from(&program);
        assert_eq!(card.summary, "A week-long clinical program.");
    }

    #[test]
    fn long_descriptions_are_truncated_on_a_char_boundary() {
        let long = "ä".repeat(200);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + 1);
        assert!(summary.ends_with('…'));
    }

    #[test]
    fn zero_price_reads_as_on_request() {
        assert_eq!(format_price(Amount::new(0), "EUR"), "Price on request");
        assert_eq!(format_price(Amount::new(265050), "EUR"), "2650.50 EUR");
    }

    #[test]
    fn filter_matches_country_by_name_or_code() {
        let program = test_program("alpine", ProgramCategory::Longevity);

        let by_name = ProgramFilter {
            country: Some("switzerland".to_string()),
            ..Default::default()
        };
        let by_code = ProgramFilter {
            country: Some("CH".to_string()),
            ..Default::default()
        };
        let elsewhere = ProgramFilter {
            country: Some("Portugal".to_string()),
            ..Default::default()
        };

        assert!(by_name.matches(&program));
        assert!(by_code.matches(&program));
        assert!(!elsewhere.matches(&program));
    }

    #[test]
    fn filter_searches_title_and_subtitle() {
        let program = test_program("alpine", ProgramCategory::Longevity);

        let hit = ProgramFilter {
            search: Some("altitude".to_string()),
            ..Default::default()
        };
        let miss = ProgramFilter {
            search: Some("thalasso".to_string()),
            ..Default::default()
        };

        assert!(hit.matches(&program));
        assert!(!miss.matches(&program));
    }

    #[test]
    fn destinations_flatten_and_sort_by_program_count() {
        let countries = vec![
            Country {
                id: uuid::Uuid::from_u128(1),
                name: "Portugal".to_string(),
                code: "pt".to_string(),
                hero_image: None,
                cities: vec![CitySummary {
                    id: uuid::Uuid::from_u128(2),
                    name: "Lagos".to_string(),
                    program_count: 1,
                }],
                program_count: 1,
            },
            Country {
                id: uuid::Uuid::from_u128(3),
                name: "Switzerland".to_string(),
                code: "ch".to_string(),
                hero_image: Some("/images/ch.jpg".to_string()),
                cities: vec![CitySummary {
                    id: uuid::Uuid::from_u128(4),
                    name: "St. Moritz".to_string(),
                    program_count: 3,
                }],
                program_count: 3,
            },
        ];

        let destinations = destinations_from_countries(countries);
        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[0].label, "St. Moritz, Switzerland");
        assert_eq!(destinations[0].hero_image, "/images/ch.jpg");
        assert_eq!(destinations[1].hero_image, PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn catalog_without_backend_serves_samples() {
        let catalog = Catalog::new(None);
        assert!(!catalog.is_remote());

        let all = catalog.programs(&ProgramFilter::default()).await.unwrap();
        assert!(!all.is_empty());

        let detox_only = catalog
            .programs(&ProgramFilter {
                category: Some(ProgramCategory::Detox),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(detox_only.iter().all(|card| card.category == "Detox"));
        assert!(detox_only.len() < all.len());
    }

    #[tokio::test]
    async fn sample_program_detail_resolves_by_slug_and_id() {
        let catalog = Catalog::new(None);
        let all = catalog.programs(&ProgramFilter::default()).await.unwrap();

        let by_slug = catalog.program(&all[0].slug).await.unwrap();
        assert!(by_slug.is_some());

        let by_id = catalog.program(&all[0].id.to_string()).await.unwrap();
        assert_eq!(by_id, by_slug);

        let missing = catalog.program("no-such-program").await.unwrap();
        assert!(missing.is_none());
    }
}
