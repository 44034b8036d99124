fn main() {
    hilbert_check::cli()
}
