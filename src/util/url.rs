use crate::Error;
use url::Url;

pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw).map_err(|err| Error::InvalidConfig {
        message: "invalid base_url".into(),
        source: Some(Box::new(err)),
    })?;

    if url.cannot_be_a_base() {
        return Err(Error::invalid_config("base_url must be a hierarchical URL"));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::invalid_config(
            "base_url must not include query or fragment",
        ));
    }

    let path = url.path();
    if path != "/" && !path.ends_with('/') {
        url.set_path(&format!("{path}/"));
    }
    Ok(url)
}

/// Appends `segments` to a normalized base, percent-encoding each one as a single segment.
pub(crate) fn endpoint_url<'a, I>(base_url: &Url, segments: I) -> Result<Url, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base_url.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| Error::invalid_config("base_url must be a hierarchical URL"))?;
        path.pop_if_empty();
        for seg in segments {
            path.push(seg);
        }
    }
    Ok(url)
}
