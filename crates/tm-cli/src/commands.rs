use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use tm_ingest::{
    fetch_zenodo_corpus, read_corpus_dir, read_corpus_zip, read_csv_table, write_csv_table,
};
use tm_model::FilterExtremes;
use tm_model::columns::{DATE, PUBLICATION_NAME, PUBLICATION_REF};
use tm_transform::{Dictionary, extract_lccn_metadata, time_distribution};

use tm_cli::inputs::{load_documents, load_reference_map};

use crate::cli::{DictionaryArgs, LccnArgs, OnboardArgs, TimeDistArgs};
use crate::types::{DictionaryResult, LccnResult, OnboardResult, TimeDistResult};

pub fn run_onboard(args: &OnboardArgs) -> Result<OnboardResult> {
    let span = info_span!("onboard");
    let _guard = span.enter();

    let (source, mut corpus) = if let Some(path) = &args.zip {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open {}", path.display()))?;
        let corpus =
            read_corpus_zip(file).with_context(|| format!("read archive {}", path.display()))?;
        (path.display().to_string(), corpus)
    } else if let Some(dir) = &args.dir {
        let corpus = read_corpus_dir(dir)
            .with_context(|| format!("read directory {}", dir.display()))?;
        (dir.display().to_string(), corpus)
    } else {
        let doi = args.zenodo_doi.as_deref().context("missing --zenodo-doi")?;
        let file_name = args.zenodo_file.as_deref().context("missing --zenodo-file")?;
        let corpus = fetch_zenodo_corpus(doi, file_name)
            .with_context(|| format!("download {file_name} from Zenodo record {doi}"))?;
        (format!("zenodo:{doi}/{file_name}"), corpus)
    };

    write_output(&mut corpus, &args.output)?;
    info!(source = %source, files = corpus.height(), "corpus onboarded");
    Ok(OnboardResult {
        source,
        output: args.output.clone(),
        files: corpus.height(),
    })
}

pub fn run_lccn(args: &LccnArgs) -> Result<LccnResult> {
    let span = info_span!("lccn", column = %args.file_name_col);
    let _guard = span.enter();

    let records = read_input(&args.input)?;
    let map = args.map.as_deref().map(load_reference_map).transpose()?;
    if let Some(map) = &map {
        debug!(entries = map.len(), "loaded reference map");
    }

    let mut augmented = extract_lccn_metadata(&records, &args.file_name_col, map.as_ref())
        .context("extract LCCN metadata")?;
    write_output(&mut augmented, &args.output)?;

    let rows = augmented.height();
    let with_name = if map.is_some() {
        Some(present_count(&augmented, PUBLICATION_NAME)?)
    } else {
        None
    };
    Ok(LccnResult {
        input: args.input.clone(),
        output: args.output.clone(),
        rows,
        with_date: present_count(&augmented, DATE)?,
        with_ref: present_count(&augmented, PUBLICATION_REF)?,
        with_name,
    })
}

pub fn run_time_dist(args: &TimeDistArgs) -> Result<TimeDistResult> {
    let periodicity = args.periodicity.into();
    let span = info_span!("time_dist", periodicity = %periodicity);
    let _guard = span.enter();

    let records = read_input(&args.input)?;
    let mut frame = time_distribution(&records, periodicity, &args.date_col, &args.title_col)
        .context("compute time distribution")?;
    if let Some(path) = &args.output {
        write_output(&mut frame, path)?;
    }
    Ok(TimeDistResult {
        periodicity,
        records: records.height(),
        frame,
        output: args.output.clone(),
    })
}

pub fn run_dictionary(args: &DictionaryArgs) -> Result<DictionaryResult> {
    let span = info_span!("dictionary");
    let _guard = span.enter();

    let documents = load_documents(&args.tokens)?;
    let mut dictionary = Dictionary::from_documents(&documents);
    info!(
        documents = dictionary.num_docs(),
        tokens = dictionary.len(),
        "dictionary built"
    );

    let mut options = FilterExtremes::new().with_keep_tokens(args.keep_tokens.clone());
    if let Some(no_below) = args.no_below {
        options = options.with_no_below(no_below);
    }
    if let Some(no_above) = args.no_above {
        options = options.with_no_above(no_above);
    }
    if let Some(keep_n) = args.keep_n {
        options = options.with_keep_n(keep_n);
    }
    let removed = if options.is_noop() {
        None
    } else {
        Some(
            dictionary
                .filter_extremes(&options)
                .context("filter extremes")?,
        )
    };

    if let Some(path) = &args.output {
        let mut frame = dictionary.to_frame().context("build dictionary table")?;
        write_output(&mut frame, path)?;
    }
    Ok(DictionaryResult {
        num_docs: dictionary.num_docs(),
        num_pos: dictionary.num_pos(),
        num_nnz: dictionary.num_nnz(),
        tokens: dictionary.len(),
        removed,
        most_common: dictionary.most_common(Some(args.most_common)),
        output: args.output.clone(),
    })
}

fn read_input(path: &Path) -> Result<DataFrame> {
    read_csv_table(path).with_context(|| format!("read {}", path.display()))
}

fn write_output(frame: &mut DataFrame, path: &Path) -> Result<()> {
    write_csv_table(frame, path).with_context(|| format!("write {}", path.display()))
}

fn present_count(frame: &DataFrame, column: &str) -> Result<usize> {
    let column = frame
        .column(column)
        .with_context(|| format!("missing output column {column}"))?;
    Ok(column.len() - column.null_count())
}
