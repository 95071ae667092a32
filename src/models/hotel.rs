use serde::Deserialize;

/// Response body of the SimpleHotelSearch API.
///
/// On failure the API answers with `error` / `error_description` instead of `hotels`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelSearchResponse {
    #[serde(default)]
    pub hotels: Vec<HotelEntry>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// One search hit. The API nests the hotel's sections one level down.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelEntry {
    #[serde(default)]
    pub hotel: Vec<HotelDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetail {
    #[serde(default)]
    pub hotel_basic_info: Option<HotelBasicInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBasicInfo {
    #[serde(default)]
    pub hotel_name: String,
    #[serde(default)]
    pub hotel_information_url: String,
    #[serde(default)]
    pub hotel_special: String,
    #[serde(default)]
    pub hotel_thumbnail_url: String,
}

impl HotelEntry {
    /// First nested section that carries basic info, if any.
    pub fn basic_info(&self) -> Option<&HotelBasicInfo> {
        self.hotel.iter().find_map(|d| d.hotel_basic_info.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_sections() {
        let json = r#"{
            "pagingInfo": {"recordCount": 1, "page": 1},
            "hotels": [{
                "hotel": [
                    {"hotelBasicInfo": {
                        "hotelNo": 136197,
                        "hotelName": "Tokyo Station Hotel",
                        "hotelInformationUrl": "https://travel.example/info/136197",
                        "hotelSpecial": "Right by the station",
                        "hotelThumbnailUrl": "https://img.example/136197.jpg"
                    }},
                    {"hotelRatingInfo": {"serviceAverage": 4.5}}
                ]
            }]
        }"#;
        let res: HotelSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.hotels.len(), 1);
        let info = res.hotels[0].basic_info().unwrap();
        assert_eq!(info.hotel_name, "Tokyo Station Hotel");
        assert_eq!(info.hotel_information_url, "https://travel.example/info/136197");
        assert!(res.error.is_none());
    }

    #[test]
    fn test_basic_info_skips_other_sections() {
        let json = r#"{"hotel":[{"hotelRatingInfo":{}},{"hotelBasicInfo":{"hotelName":"B"}}]}"#;
        let entry: HotelEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.basic_info().unwrap().hotel_name, "B");
        assert_eq!(entry.basic_info().unwrap().hotel_special, "");
    }

    #[test]
    fn test_empty_nested_list_has_no_basic_info() {
        let entry: HotelEntry = serde_json::from_str(r#"{"hotel":[]}"#).unwrap();
        assert!(entry.basic_info().is_none());
    }

    #[test]
    fn test_parse_error_body() {
        let json = r#"{"error":"not_found","error_description":"data is not found"}"#;
        let res: HotelSearchResponse = serde_json::from_str(json).unwrap();
        assert!(res.hotels.is_empty());
        assert_eq!(res.error.as_deref(), Some("not_found"));
        assert_eq!(res.error_description.as_deref(), Some("data is not found"));
    }
}
