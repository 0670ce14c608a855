use bccr_core::{BccrError, CanonicalTable, Layout, SeriesRequest, merge_series};

use super::{ReadOptions, ReadOutput, SeriesSpec};
use crate::Bccr;

fn specs_for(layout: Layout, request: &SeriesRequest) -> Vec<SeriesSpec> {
    request
        .entries()
        .iter()
        .map(|(id, name)| SeriesSpec {
            id: *id,
            layout,
            name: name.clone(),
            aggregator: None,
        })
        .collect()
}

impl Bccr {
    /// Read tables whose rows are years and columns are months.
    ///
    /// Behavior:
    /// - A single bare identifier yields [`ReadOutput::Series`]; a mapping yields
    ///   [`ReadOutput::Table`] with one column per entry.
    /// - Unnamed entries are named after the table title.
    /// - Summary columns (`Promedio`, `Total`) are ignored.
    ///
    /// # Errors
    /// `InvalidRequest` for inverted year bounds, `SourceUnavailable`,
    /// `UnrecognizedLayout` or `UnsupportedFrequency` for a failing series, subject
    /// to the configured failure policy.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::reader::read_year_row_month_col",
            skip(self, request, opts),
            fields(series = request.len(), frequency = ?opts.frequency),
        )
    )]
    pub async fn read_year_row_month_col(
        &self,
        request: &SeriesRequest,
        opts: &ReadOptions,
    ) -> Result<ReadOutput, BccrError> {
        self.read_month_layout(Layout::YearRowMonthCol, request, opts)
            .await
    }

    /// Read tables whose rows are months and columns are years.
    ///
    /// Same return shape and naming rules as
    /// [`read_year_row_month_col`](Self::read_year_row_month_col); summary rows
    /// (`Total`, `Promedio`) are ignored.
    ///
    /// # Errors
    /// As for [`read_year_row_month_col`](Self::read_year_row_month_col).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::reader::read_month_row_year_col",
            skip(self, request, opts),
            fields(series = request.len(), frequency = ?opts.frequency),
        )
    )]
    pub async fn read_month_row_year_col(
        &self,
        request: &SeriesRequest,
        opts: &ReadOptions,
    ) -> Result<ReadOutput, BccrError> {
        self.read_month_layout(Layout::MonthRowYearCol, request, opts)
            .await
    }

    /// Read tables whose rows are named indicators and columns are years.
    ///
    /// Behavior:
    /// - Always returns a table with one column per indicator.
    /// - A named entry prefixes its indicator names (`"Real_"` gives
    ///   `"Real_Agricultura"`); an unnamed entry adds no prefix.
    /// - Indicator rows without any value (section headings) are dropped.
    ///
    /// # Errors
    /// As for [`read_year_row_month_col`](Self::read_year_row_month_col).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::reader::read_indicator_row_year_col",
            skip(self, request, opts),
            fields(series = request.len(), frequency = ?opts.frequency),
        )
    )]
    pub async fn read_indicator_row_year_col(
        &self,
        request: &SeriesRequest,
        opts: &ReadOptions,
    ) -> Result<CanonicalTable, BccrError> {
        opts.years.validate()?;
        let specs = specs_for(Layout::IndicatorRowYearCol, request);
        let series = match specs.first() {
            Some(spec) if request.is_single() => {
                self.read_spec(spec, opts, self.quiet_for(opts)).await?
            }
            _ => self.read_specs(&specs, opts).await?,
        };
        Ok(merge_series(series))
    }

    async fn read_month_layout(
        &self,
        layout: Layout,
        request: &SeriesRequest,
        opts: &ReadOptions,
    ) -> Result<ReadOutput, BccrError> {
        opts.years.validate()?;
        let specs = specs_for(layout, request);
        if request.is_single()
            && let Some(spec) = specs.first()
        {
            let series = self.read_spec(spec, opts, self.quiet_for(opts)).await?;
            return series
                .into_iter()
                .next()
                .map(ReadOutput::Series)
                .ok_or_else(|| {
                    BccrError::unrecognized_layout(layout, "table produced no series")
                });
        }
        let series = self.read_specs(&specs, opts).await?;
        Ok(ReadOutput::Table(merge_series(series)))
    }
}
